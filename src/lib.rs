pub mod app;
pub mod color;
pub mod controller;
pub mod data;
pub mod history;
pub mod notify;
pub mod surface;
pub mod ui;
