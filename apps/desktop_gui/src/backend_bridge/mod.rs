//! Bridge between the egui UI thread and the backend worker.

pub mod commands;
pub mod runtime;
