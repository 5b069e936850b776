//! Improvement strategies selectable from the CLI.

use font_tour::tour::Strategy;

/// The available strategies for shortening the greedy tour.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellStrategy {
    /// Sequential first-improvement relocation.
    #[clap(name = "first")]
    First,
    /// Parallel best-improvement relocation.
    #[clap(name = "best")]
    Best,
}

impl ShellStrategy {
    /// Get the `Strategy` for the improvement algorithm.
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::First => Strategy::First,
            Self::Best => Strategy::Best,
        }
    }
}

impl std::fmt::Display for ShellStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Best => write!(f, "best"),
        }
    }
}
