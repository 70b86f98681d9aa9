use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockroom")]
#[command(version = env!("STOCKROOM_VERSION"))]
#[command(about = "Keep track of products, prices and stock levels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "a")]
    Add {
        name: String,
        category: String,
        /// Unit price
        price: f64,
        /// Units in stock
        quantity: u32,

        /// Free text description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Show one or more products
    #[command(alias = "v")]
    Show {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Change fields of a product
    #[command(alias = "e")]
    Update {
        id: u32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        quantity: Option<u32>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete one or more products
    #[command(alias = "rm")]
    Delete {
        /// Product ids
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// List all products
    #[command(alias = "ls")]
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find products whose name contains a term (case-sensitive)
    Search { term: String },

    /// List products in exactly this category
    Category { name: String },

    /// List products with fewer units than the threshold
    LowStock {
        /// Defaults to the configured low-stock-threshold
        #[arg(short, long)]
        threshold: Option<u32>,
    },

    /// Show totals overall and per category
    Stats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write the inventory to a CSV file
    Export { path: PathBuf },

    /// Replace the inventory with the contents of a CSV file
    Import { path: PathBuf },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, low-stock-threshold, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
