//! Defines the command-line arguments and subcommands for the selkit CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, ArgGroup, Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "selkit",
    version,
    about = "Build and render CSS selector strings."
)]
pub struct SelkitArgs {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build one compound selector from fragment flags and print it.
    #[command(group(ArgGroup::new("fragments").required(true).multiple(true)))]
    Build {
        /// Type selector, e.g. `div`.
        #[arg(long, group = "fragments")]
        element: Vec<String>,
        /// Id without the leading `#`.
        #[arg(long, group = "fragments")]
        id: Vec<String>,
        /// Class without the leading `.`; repeat for several.
        #[arg(long, group = "fragments")]
        class: Vec<String>,
        /// Attribute expression without brackets, e.g. `href$=".png"`.
        #[arg(long, group = "fragments")]
        attr: Vec<String>,
        /// Pseudo-class without the leading `:`; repeat for several.
        #[arg(long, group = "fragments")]
        pseudo_class: Vec<String>,
        /// Pseudo-element without the leading `::`.
        #[arg(long, group = "fragments")]
        pseudo_element: Vec<String>,
    },
    /// Render a JSON-encoded selector tree.
    Render {
        /// JSON file to read; stdin when omitted or `-`.
        file: Option<PathBuf>,
        /// Print the normalized JSON instead of the selector string.
        #[arg(long)]
        json: bool,
    },
    /// Print a rectangle as JSON.
    Rect {
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        /// Print the area instead of the JSON encoding.
        #[arg(long)]
        area: bool,
    },
}
