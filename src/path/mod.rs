mod expander;
mod resolver;

pub use expander::PathExpander;
pub use resolver::{resolve, resolve_directory, resolve_existing};
