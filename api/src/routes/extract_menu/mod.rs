pub mod extract_menu_response;
pub mod extract_menu_route;
