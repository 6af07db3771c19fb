//! Console presenters and prompt sequences.

pub mod main_menu;
pub mod profile_form;
pub mod records;
pub mod report;
pub mod results;
pub mod scenario;
pub mod update_form;
