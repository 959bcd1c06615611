use clap::Parser;
use png_rehash::cli::Args;
use png_rehash::constants::{ASSETS_DIR, SUCCESS_PREFIX, WARNING_PREFIX};
use png_rehash::{error, logger, rehash_assets, select_reencoder, verbose, RehashSummary, Result};
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse();
    logger::set_verbosity(args.verbosity());

    match run() {
        Ok(summary) => print_summary(&summary),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<RehashSummary> {
    let reencoder = select_reencoder();
    verbose!("Using {} re-encoder", reencoder.kind());

    rehash_assets(Path::new(ASSETS_DIR), reencoder.as_ref())
}

fn print_summary(summary: &RehashSummary) {
    println!(
        "\n{} Successfully modified {}/{} images",
        SUCCESS_PREFIX, summary.succeeded, summary.total
    );
    if summary.failed_count() > 0 {
        println!("{}  Failed files: {}", WARNING_PREFIX, summary.failed_count());
    }
    println!("Note: Image hash values have changed, but image content and size remain the same.");
}
