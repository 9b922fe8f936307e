//! Application services

pub mod demos;

pub use demos::{DemoReport, DemoService};
