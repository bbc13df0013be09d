use clap::{Parser, Subcommand};

use crate::catalog::Category;

#[derive(Parser, Debug)]
#[command(name = "enchant-codex")]
#[command(version, about = "Browse and search Minecraft enchantments with AI-powered advice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog in an interactive terminal UI
    Browse,

    /// Query the catalog and print tagged results
    Search {
        /// Search text; spans all collections. Omit to list one category.
        #[arg(default_value = "")]
        query: String,

        /// Category to list when the query is empty
        #[arg(short, long, value_enum, default_value = "tools")]
        category: Category,

        /// Only records applying to this item type (e.g. "Pickaxe")
        #[arg(short, long)]
        item: Option<String>,

        /// Only treasure enchantments
        #[arg(short, long)]
        treasure_only: bool,

        /// Hide curse enchantments
        #[arg(short, long)]
        no_curses: bool,
    },

    /// Ask the oracle for advice on one enchantment
    Advice {
        /// Enchantment id (e.g. "fort"; ids are shown by `search`)
        enchant_id: String,

        /// Usage context to tailor the advice to
        #[arg(long, default_value = "general usage")]
        context: String,
    },

    /// Ask the oracle for the best enchantment build for an item
    Build {
        /// Item name, e.g. "Diamond Pickaxe"
        item: String,
    },

    /// Chat with the Mystic Guide on stdin/stdout
    Chat,

    /// List the fixed browsing categories
    Categories,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
