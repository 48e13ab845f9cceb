//! An in-memory to-do list served as a small HTML application.

pub mod api;
pub mod models;
pub mod render;
pub mod selfcheck;
pub mod store;
