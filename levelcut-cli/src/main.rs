use std::fs;

use facet::Facet;
use facet_args as args;
use levelcut::{Config, Strategy};

/// Convert an ASCII level map into obstacle rectangles and entity points
#[derive(Facet, Debug)]
struct Args {
    /// Path to the level map file
    #[facet(args::positional)]
    input: String,

    /// Prefer vertical runs when merging wall cells
    #[facet(args::named)]
    prefer_vertical: bool,

    /// Repeatedly consume the largest candidate block first
    #[facet(args::named)]
    long_first: bool,
}

fn main() {
    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let input = fs::read_to_string(&args.input).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {}", args.input, e);
        std::process::exit(1);
    });

    let strategy = Strategy::from_flags(args.prefer_vertical, args.long_first);
    match levelcut::generate_listing(&input, &Config::default(), strategy) {
        Ok(listing) => print!("{listing}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
