pub mod dashboard;
pub mod demo;
pub mod predict;
pub mod ui;
