pub mod parse;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cvsift", about = "Extract structured fields from resumes", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse resume files (pdf/docx) and print the extracted fields
    Parse {
        /// Resume file path(s)
        files: Vec<String>,
        /// Print the result as pretty JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Write the JSON result(s) to a file
        #[arg(short, long)]
        output: Option<String>,
    },
}
