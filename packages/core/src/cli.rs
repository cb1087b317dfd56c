use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// HeadHunter vacancy tracker CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "hh-vacancy-tracker",
    version,
    about = "Search hh.ru vacancies and filter saved postings by salary"
)]
pub struct Cli {
    /// Path of the JSON file vacancies are saved to
    #[arg(long, global = true)]
    pub store_path: Option<PathBuf>,

    /// Vacancy search API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Search area id (113 = Russia)
    #[arg(long, global = true)]
    pub area: Option<u32>,

    /// Maximum number of vacancies collected per search
    #[arg(long, global = true)]
    pub limit: Option<usize>,

    /// Runs the interactive search when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show saved vacancies paying at least the given salary
    Query {
        #[arg(long)]
        min_salary: i64,
    },

    /// Remove a saved vacancy by its URL
    Delete {
        #[arg(long)]
        url: String,
    },

    /// Print every saved vacancy
    List,
}
