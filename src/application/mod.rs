//! Application layer: demo drivers and file input
//!
//! This layer orchestrates domain logic and turns it into printable reports.

pub mod error;
pub mod error_ext;
pub mod grid;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use grid::{load_grid, parse_grid};
pub use services::{DemoReport, DemoService};
