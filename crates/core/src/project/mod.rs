//! Project descriptor and directory handles

mod descriptor;
mod directory;

pub use descriptor::{Language, Project, ProjectType};
pub use directory::Directory;
