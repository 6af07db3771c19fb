pub mod app;
pub mod console;
pub mod csv_loader;
pub mod logging;
pub mod scenario_file;
pub mod utils;
pub mod views;
