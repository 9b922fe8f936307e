//! Domain layer: the exercises themselves
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod geometry;
pub mod list;
pub mod magic;
pub mod tree;

pub use error::{DomainError, DomainResult};
pub use geometry::{Line, Point};
pub use list::{LinkedList, Queue};
pub use magic::{magic_constant, validate, MagicReport, MagicSquare, Sums, Verdict};
pub use tree::{Tree, TreeConvert};
