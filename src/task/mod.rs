// src/task/mod.rs

//! Task records and their keyed store.

pub mod model;
pub mod store;

pub use model::Task;
pub use store::TaskStore;
