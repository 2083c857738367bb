pub mod config;
pub mod day;
pub mod event;
pub mod interactive;
pub mod month;
pub mod note;
