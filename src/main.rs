use anyhow::Result;
use clap::Parser;
use tracing::error;

use adsift::{classify, report, utils, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match classify::run_classification(&args) {
        Ok(result) => {
            report::print_classification(&result, &args);

            if let Some(csv_path) = &args.csv {
                report::write_csv(&result, csv_path)?;
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Classification failed");
            std::process::exit(1);
        }
    }
}
