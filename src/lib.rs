//! Course lab exercises
//!
//! - [`domain`]: point/line geometry, binary tree, linked list and queue,
//!   magic-square generator and validator
//! - [`application`]: demo drivers producing printable reports, grid files
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing and dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;

pub mod util {
    pub mod testing;
}
