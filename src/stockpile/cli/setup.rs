use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stockpile", bin_name = "stockpile", version)]
#[command(about = "Write-through inventory manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $STOCKPILE_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new product
    #[command(alias = "a")]
    Add {
        /// Unique product id
        id: String,

        /// Product name
        name: String,

        /// Units in stock
        #[arg(allow_negative_numbers = true)]
        quantity: i64,

        /// Unit price
        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Remove { id: String },

    /// Set the quantity of a product
    #[command(alias = "qty")]
    SetQuantity {
        id: String,

        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Set the unit price of a product
    #[command(alias = "price")]
    SetPrice {
        id: String,

        #[arg(allow_negative_numbers = true)]
        price: f64,
    },

    /// Rename a product
    Rename { id: String, name: String },

    /// Update quantity and/or price in one step
    Update {
        id: String,

        /// New quantity
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// New unit price
        #[arg(long, allow_negative_numbers = true)]
        price: Option<f64>,
    },

    /// Search products by name (case-insensitive)
    #[command(alias = "s")]
    Search { term: String },

    /// List all products
    #[command(alias = "ls")]
    List,

    /// Show product count and total stock value
    Summary,

    /// Show the distinct first words of product names
    Groups,

    /// Get or set configuration
    Config {
        /// Configuration key (format, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
