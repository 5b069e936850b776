//! CLI for ordering fonts by visual similarity.

mod commands;
pub mod data;
mod strategy;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;
use font_tour::DistanceMatrix;

use commands::Commands;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The directory with the fonts and their precomputed features and densities.
    #[arg(short('i'), long, default_value = "./fonts")]
    font_dir: PathBuf,

    /// Compute the distance matrix in parallel.
    #[arg(short('p'), long)]
    parallel: bool,

    /// The name of the log-file to use.
    #[arg(short('l'), long, default_value = "font-tour.log")]
    log_name: String,

    /// Log at debug level, including progress of the distance matrix and greedy path.
    #[arg(short('v'), long)]
    verbose: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = utils::configure_logger(&args.log_name, args.verbose)?;
    ftlog::info!("Log file: {log_path:?}");

    let batch = data::load_fonts(&args.font_dir)?;
    println!("Loaded {} font names, files, and densities", batch.cardinality());
    ftlog::info!(
        "Loaded {} fonts with {} features each from {:?}",
        batch.cardinality(),
        batch.dimensionality(),
        args.font_dir
    );

    let matrix = if args.parallel {
        DistanceMatrix::par_from_batch(&batch)
    } else {
        DistanceMatrix::from_batch(&batch)
    };
    println!("Distance matrix computed");

    match args.command {
        Commands::Sort {
            out_dir,
            strategy,
            percentiles,
            thresholds,
        } => commands::sort::sort_fonts(&batch, &matrix, strategy.strategy(), thresholds, &percentiles, out_dir),
        Commands::Nearest { name, k } => {
            let found = commands::nearest::print_nearest(&batch, &matrix, &name, k);
            ftlog::info!("Answered {found} of {} nearest-font queries.", name.len());
            Ok(())
        }
        Commands::PathLength { order } => {
            let length = commands::path_length::measure_list(&batch, &matrix, &order)?;
            println!("Path length: {length:.2}");
            Ok(())
        }
    }
}
