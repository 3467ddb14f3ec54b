mod catalog;
mod error;
mod rewriter;
pub mod timestamp;
mod types;

pub use catalog::{AssistKind, Character, World};
pub use error::{NookError, Result};
pub use rewriter::TextRewriter;
pub use types::*;
