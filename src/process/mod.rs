mod opener;

pub use opener::{open_path, OpenError};
