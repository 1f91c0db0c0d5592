//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --color, --verbose, --quiet) are inherited
//! by all subcommands. Input and render flags are shared through flattened
//! argument groups.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use listtree::{ColorMode, DuplicatePolicy, InputDialect};

/// ListTree - draw trees from flat path listings
#[derive(Parser, Debug)]
#[command(name = "listtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./listtree.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render items as a tree
    Render {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the intermediate row table
    Rows {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Keep the items that contain any keyword
    Filter {
        #[command(flatten)]
        input: InputArgs,

        /// Keyword to look for (case-sensitive, repeatable)
        #[arg(short = 'k', long = "keyword", value_name = "KEYWORD", required = true)]
        keywords: Vec<String>,

        /// Also keep the items that form the matches' ancestor branches
        #[arg(long)]
        subtree: bool,

        /// Render the matches and their ancestors as a tree
        #[arg(long)]
        tree: bool,

        #[command(flatten)]
        render: RenderArgs,
    },
}

/// Where items come from and how they are built into rows
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Items file, one per line (default: stdin, `-` also means stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Labels file, one label per item line
    #[arg(long, value_name = "FILE", conflicts_with = "tab_labels")]
    pub labels: Option<PathBuf>,

    /// Split each input line on its first tab into item and label
    #[arg(long)]
    pub tab_labels: bool,

    /// Input dialect
    #[arg(long, value_enum)]
    pub dialect: Option<InputDialect>,

    /// Minimum zero-pad width for dot-space numbers
    #[arg(long, value_name = "N")]
    pub pad_width: Option<usize>,

    /// Synthesise missing parent branches
    #[arg(long)]
    pub infer_parents: bool,

    /// How to treat items that collapse into the same node
    #[arg(long, value_enum)]
    pub duplicates: Option<DuplicatePolicy>,
}

/// How the tree is drawn
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Right-anchored tree with the glyph columns mirrored
    #[arg(long)]
    pub mirrored: bool,

    /// ASCII glyphs instead of box drawing
    #[arg(long)]
    pub ascii: bool,

    /// Hide labels appended to path-dialect names
    #[arg(long)]
    pub no_property: bool,
}
