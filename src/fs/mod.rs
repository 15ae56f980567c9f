//! Filesystem engine: tree copy and delete, collision naming, name search
//! and the single-entry operations the commands are built from.

mod copy;
mod delete;
mod entry;
mod error;
mod naming;
pub mod ops;
mod search;

pub use copy::copy_tree;
pub use delete::delete_tree;
pub use entry::{display_name, FileEntry};
pub use error::{EntryFailure, FsError, TreeReport};
pub use naming::next_available_name;
pub use search::{search, Search};
