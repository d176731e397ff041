//! Task model: leaf process and file-system work, plus composites

pub mod action;
pub mod command;
pub mod model;

// Re-export commonly used types
pub use action::Action;
pub use command::ProcessCommand;
pub use model::{Task, TaskKind};
