use crate::logger::Verbosity;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "png-rehash",
    about = "Change the content hash of every PNG under MasterMath/Assets.xcassets",
    long_about = "png-rehash re-encodes every PNG found under MasterMath/Assets.xcassets \
                  (relative to the current directory) and replaces each file in place. \
                  The decoded pixels and dimensions stay the same; only the file bytes change. \
                  PNGs are re-encoded in-process when the PNG decoder is available, \
                  otherwise with the macOS `sips` tool.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    png-rehash\n  \
    png-rehash --quiet\n  \
    png-rehash -v"
)]
pub struct Args {
    #[arg(
        short = 'q',
        long,
        help = "Only print the final summary and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        help = "Print per-file details",
        long_help = "Print the strategy in use and the byte size of each file before and after re-encoding."
    )]
    pub verbose: bool,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}
