//! Executes tasks: process leaves, file-system actions, composites and watches

mod executor;
mod watch;

pub use executor::TaskRunner;
pub use watch::is_relevant;
