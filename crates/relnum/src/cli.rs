// ABOUTME: Command line arguments for the relnum binary
// ABOUTME: Positions are 1-based on the command line and 0-based everywhere else

use clap::{ArgAction, Parser};
use std::path::PathBuf;

pub const DEFAULT_HEIGHT: u64 = 20;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "relnum",
    version,
    about = "Print a file with vim-style relative line numbers"
)]
pub struct Cli {
    /// File to open
    pub file: PathBuf,

    /// Line the cursor is on
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub line: u64,

    /// First visible line [default: centered on the cursor]
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub top: Option<u64>,

    /// Viewport height in lines
    #[arg(
        short = 'H',
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub height: u64,

    /// Configuration file [default: <config dir>/relnum/relnum.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the raw phantom markup instead of a text gutter
    #[arg(long)]
    pub html: bool,

    /// Never emit ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Increase logging verbosity, up to three times
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// 0-based cursor row
    pub fn cursor_row(&self) -> usize {
        (self.line - 1) as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// 0-based first visible row, centering `cursor_row` when no top was given
    pub fn top_row(&self, cursor_row: usize) -> usize {
        match self.top {
            Some(top) => (top - 1) as usize,
            None => cursor_row.saturating_sub(self.height() / 2),
        }
    }
}
