pub mod config;
pub mod counter;
pub mod error;
pub mod logging;
pub mod root;
pub mod store;
pub mod ui;
