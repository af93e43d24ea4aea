mod collaborators;
mod features;
pub mod forms;

pub use collaborators::*;
pub use features::*;
