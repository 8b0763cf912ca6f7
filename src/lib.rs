pub mod core;
pub mod gui;
pub mod logging;
pub mod persistence;
