use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use squarefill::{fill_square, logging, DictionaryIndex, Preset};

#[derive(Parser)]
#[command(
    name = "squarefill",
    about = "Fill a square grid so every row and column is a dictionary word",
    version
)]
struct Cli {
    /// Word list, one word per line
    #[arg(short, long, value_name = "FILE")]
    dictionary: PathBuf,

    /// Grid width and height
    #[arg(short, long, default_value = "5")]
    size: usize,

    /// Stop after this many grids
    #[arg(short = 'n', long, default_value = "10")]
    max_results: usize,

    /// Lock a word into an entry before filling, e.g. 0-a=crane (repeatable)
    #[arg(short, long = "preset", value_name = "ENTRY=WORD")]
    presets: Vec<Preset>,

    /// Also write the grids to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let dictionary = DictionaryIndex::load(&cli.dictionary)?;

    let outcome = fill_square(&dictionary, cli.size, &cli.presets, cli.max_results)
        .context("Failed to apply presets")?;

    let display_grids: Vec<String> = outcome.results.iter().map(|grid| grid.to_string()).collect();

    println!("==================== There are {} grids ====================\n", display_grids.len());
    for display_grid in &display_grids {
        println!("{}\n", display_grid);
    }
    println!("{:?}", outcome.statistics);

    if let Some(output) = &cli.output {
        let mut contents = display_grids.join("\n\n");
        contents.push('\n');
        fs::write(output, contents)
            .with_context(|| format!("Unable to write {}", output.display()))?;
        log::info!("Wrote {} grids to {}", display_grids.len(), output.display());
    }

    Ok(())
}
