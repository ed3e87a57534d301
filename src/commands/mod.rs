//! CLI commands

pub mod clean;
pub mod generate;
pub mod list;

use clap::ValueEnum;

/// A content collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Posts,
    Teachers,
}
