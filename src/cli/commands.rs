// src/cli/commands.rs
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the password API and serve the frontend
    Serve {
        /// Address to bind (defaults to WEB_ADDRESS)
        #[arg(long)]
        address: Option<String>,

        /// Port to listen on (defaults to WEB_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Directory with the frontend files (defaults to STATIC_DIR)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Generate a password
    Generate {
        /// Password length (the server falls back to 12 when out of range)
        #[arg(long, short)]
        length: Option<usize>,

        #[arg(long)]
        no_uppercase: bool,

        #[arg(long)]
        no_lowercase: bool,

        #[arg(long)]
        no_numbers: bool,

        #[arg(long)]
        no_symbols: bool,

        /// Copy the generated password to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Evaluate the strength of a password
    Evaluate {
        #[arg(required = true)]
        password: String,
    },

    /// Strengthen a password and evaluate the result
    Strengthen {
        #[arg(required = true)]
        password: String,
    },

    /// Interactive password page driven by key presses
    Interactive,
}
