//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::config::TreeStyle;

/// Course lab exercises: recursive containers, point/line geometry and magic squares
#[derive(Parser, Debug)]
#[command(name = "labkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global one
    #[arg(short, long, global = true, env = "LABKIT_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Point and line: rendering, distance, length
    Geometry {
        /// First point
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        from: Option<Vec<f64>>,
        /// Second point
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        to: Option<Vec<f64>>,
    },

    /// Binary tree rendering
    Tree {
        /// Rendering style (default from config)
        #[arg(long, value_enum)]
        style: Option<TreeStyle>,
    },

    /// Linked list rendering
    List,

    /// Queue built on the linked list
    Queue {
        /// Values to add, front first
        #[arg(allow_negative_numbers = true, default_values_t = [3, 5, -1])]
        values: Vec<i64>,
    },

    /// Functional append onto a one-element list
    Mylist {
        /// First element of the starting list
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        first: i64,
        /// Values to append
        #[arg(allow_negative_numbers = true, default_values_t = [4, 5, 6])]
        values: Vec<i64>,
    },

    /// Generate and validate a magic square
    Magic {
        /// Odd order of the square (default from config)
        #[arg(short, long)]
        order: Option<usize>,
        /// Cell width (default from config)
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Validate a grid read from a file
    Check {
        /// Whitespace-separated integers, one row per line
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Run every demo with default input
    Demo,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a template config file
    Template,
    /// Print the global config file location
    Path,
}
