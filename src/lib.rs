pub mod command;
pub mod error;
pub mod seed;
pub mod shell;
pub mod tree;

pub use error::FsError;
pub use shell::Shell;
pub use tree::{Node, NodeId, NodeKind, Tree};
