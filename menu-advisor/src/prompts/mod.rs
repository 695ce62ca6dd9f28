//! Prompt templates for the three completion calls.
//!
//! These templates are the closest thing this system has to a protocol:
//! each one fixes the expected output shape of a call, so they are kept as
//! versioned constants with render functions and exercised against response
//! fixtures in tests — never against the live service.

pub mod extract_menu;
pub mod next_question;
pub mod recommend;
