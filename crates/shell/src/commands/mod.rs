//! The commands under the `font-tour` CLI.

pub mod nearest;
pub mod path_length;
pub mod sort;

use std::path::PathBuf;

use clap::Subcommand;

use crate::strategy::ShellStrategy;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Order the fonts by similarity and write the ordered list, the density groups and a summary.
    Sort {
        /// The directory to write the font lists and summary to.
        #[arg(short('o'), long, default_value = ".")]
        out_dir: PathBuf,

        /// The local search used to shorten the greedy path.
        #[arg(short('s'), long, default_value_t = ShellStrategy::First)]
        strategy: ShellStrategy,

        /// The percentiles of the densities at which to split the groups.
        #[arg(long, value_delimiter = ',', default_values_t = font_tour::groups::QUARTILES)]
        percentiles: Vec<f64>,

        /// Explicit ascending density thresholds. Overrides `--percentiles`.
        #[arg(short('t'), long, value_delimiter = ',')]
        thresholds: Option<Vec<f64>>,
    },
    /// Print the closest fonts to each of the named fonts.
    Nearest {
        /// The names of the fonts to query.
        #[arg(short('q'), long, required = true)]
        name: Vec<String>,

        /// The number of closest fonts to print.
        #[arg(short('k'), long, default_value = "5")]
        k: usize,
    },
    /// Print the path length of an ordered list of font names.
    PathLength {
        /// A file with one font name per line.
        #[arg(long)]
        order: PathBuf,
    },
}
