//! Command-line interface definition.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "maktab_cli",
    about = "Console client for the Maktab school-management backend",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and persist the session.
    Login {
        /// Phone number starting with 998, leading plus sign optional.
        #[arg(long)]
        phone: String,

        /// Account password.
        #[arg(long)]
        password: String,
    },

    /// Clear the stored session.
    Logout,

    /// Show the current session state.
    Status,

    /// Show the dashboard menu for the signed-in role.
    Dashboard,

    /// List teachers, with optional search and paging.
    Teachers {
        /// Filter by name, subject, or phone fragment.
        #[arg(long, default_value = "")]
        search: String,

        /// 1-based page number.
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Print version information.
    Version,
}
