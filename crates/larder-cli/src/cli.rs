//! Command-line definitions.

use clap::{ArgAction, Args, Parser, Subcommand};
use larder_core::RecipeDraft;

/// Larder - keep your recipes in a local file
#[derive(Parser, Debug)]
#[command(name = "larder", version)]
#[command(about = "Create, view, edit and delete recipes stored locally", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all recipes
    List {
        /// Print the stored JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Show one recipe
    Show {
        /// Recipe ID
        id: String,
        /// Print the stored JSON instead of a formatted view
        #[arg(long)]
        json: bool,
    },
    /// Add a recipe
    Add(RecipeArgs),
    /// Change fields of an existing recipe
    Edit {
        /// Recipe ID
        id: String,
        #[command(flatten)]
        fields: RecipeArgs,
    },
    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,
    },
    /// Delete every recipe
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `larder config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Print one value by dotted key (e.g. storage.namespace)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Recipe fields as flags. Repeated `--ingredient`/`--step` values are
/// joined with newlines.
#[derive(Args, Debug, Default, Clone)]
pub struct RecipeArgs {
    /// Recipe title
    #[arg(long)]
    pub title: Option<String>,

    /// One ingredient (repeatable)
    #[arg(short = 'i', long = "ingredient")]
    pub ingredients: Vec<String>,

    /// One instruction step (repeatable)
    #[arg(short = 's', long = "step")]
    pub steps: Vec<String>,

    /// Link to a picture; pass "" to remove it
    #[arg(long)]
    pub image_url: Option<String>,
}

impl RecipeArgs {
    /// Converts flags into an unvalidated draft.
    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            ingredients: join_lines(&self.ingredients),
            instructions: join_lines(&self.steps),
            image_url: self.image_url.clone(),
        }
    }
}

fn join_lines(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join("\n"))
    }
}
