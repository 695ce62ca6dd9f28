pub mod extract_menu;
pub mod health;
pub mod next_question;
pub mod recommend;
