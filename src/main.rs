//! lettergrid - CLI
//!
//! Word-search tooling for Boggle-style letter grids: highlight every
//! placement of a query word, or solve the whole grid against a dictionary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lettergrid::{
    commands::{run_find, run_solve},
    core::{Grid, score},
    dictionary::loader::load_from_file,
    output::{print_find_result, print_solve_report},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lettergrid",
    about = "Find and solve words in Boggle-style letter grids",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Grid row, repeated once per row (e.g. -r cat -r xax -r xxx)
    #[arg(short = 'r', long = "row", global = true)]
    rows: Vec<String>,

    /// File containing the grid, one row per line
    #[arg(short = 'g', long, global = true)]
    grid_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every path spelling a word in the grid
    Find {
        /// The word to search for
        word: String,

        /// List each path's coordinates
        #[arg(short, long)]
        verbose: bool,
    },

    /// Find every dictionary word hidden in the grid
    Solve {
        /// Word list file, one word per line
        #[arg(short, long)]
        dictionary: PathBuf,

        /// Minimum word length to report
        #[arg(short, long, default_value = "3")]
        min_length: usize,
    },

    /// Score a word by Boggle rules
    Score {
        /// The word to score
        word: String,
    },
}

/// Build the grid from --grid-file or repeated --row flags
fn load_grid(rows: &[String], grid_file: Option<&PathBuf>) -> Result<Grid> {
    let rows: Vec<String> = if let Some(path) = grid_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read grid file {}", path.display()))?;
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    } else {
        rows.to_vec()
    };

    if rows.is_empty() {
        bail!("No grid given: pass --row once per row, or --grid-file");
    }

    Grid::from_rows(&rows).map_err(Into::into)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find { word, verbose } => {
            let grid = load_grid(&cli.rows, cli.grid_file.as_ref())?;
            let result = run_find(&grid, &word);
            print_find_result(&result, verbose);
        }
        Commands::Solve {
            dictionary,
            min_length,
        } => {
            let grid = load_grid(&cli.rows, cli.grid_file.as_ref())?;
            let dict = load_from_file(&dictionary)
                .with_context(|| format!("Failed to read dictionary {}", dictionary.display()))?;
            let report = run_solve(&grid, &dict, min_length);
            print_solve_report(&report);
        }
        Commands::Score { word } => {
            println!("{}: {}", word.to_lowercase(), score(&word));
        }
    }

    Ok(())
}
