use clap::{Parser, Subcommand};
use std::path::PathBuf;

use library_admin::models::BookId;

#[derive(Parser, Debug)]
#[command(name = "library-admin", version)]
#[command(about = "Administer library stock from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Extra configuration file, layered over config/default
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Change the stock quantity of a book
    Quantity {
        book_id: BookId,

        /// Quantity currently shown for the book
        #[arg(long)]
        current: String,

        /// Quantity to save
        #[arg(long = "new")]
        new_quantity: String,
    },

    /// Delete a book
    Delete {
        book_id: BookId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search the external catalog and pick a book to register
    Search {
        keyword: String,

        /// Candidate to select; asked interactively when omitted
        #[arg(short, long)]
        select: Option<usize>,

        /// Register the selected book with this initial quantity
        #[arg(short, long)]
        register: Option<u32>,
    },
}
