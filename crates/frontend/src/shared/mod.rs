pub mod config;
pub mod dom;
pub mod history;
pub mod scroll;
