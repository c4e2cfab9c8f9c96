//! Broadcast ephemeris position resolution tool
use clap::Parser;
use log::{error, info};

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::exit;

use gnss_brdc::prelude::{Config, EphemerisStore, Solver};
use gnss_brdc::report::format_orbits;

/// Resolves satellite positions for one day,
/// from a broadcast navigation file.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Navigation (broadcast ephemeris) file
    input: PathBuf,
    /// Resolved coordinates table
    #[arg(short, long, default_value = "coordinates.txt")]
    output: PathBuf,
    /// Grid period [s]
    #[arg(long, default_value_t = 300.0)]
    step: f64,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let store = match EphemerisStore::from_file(&cli.input) {
        Ok(store) => store,
        Err(e) => {
            error!("failed to interpret \"{}\": {}", cli.input.display(), e);
            exit(1);
        },
    };

    info!(
        "collected {} ephemeris ({} satellites)",
        store.len(),
        store.satellites().len()
    );

    let cfg = Config {
        step: cli.step,
        ..Default::default()
    };

    let solver = Solver::new(cfg, store);
    let orbits = solver.run();

    let output = match File::create(&cli.output) {
        Ok(fd) => fd,
        Err(e) => {
            error!("failed to create \"{}\": {}", cli.output.display(), e);
            exit(1);
        },
    };

    let mut writer = BufWriter::new(output);
    if let Err(e) = format_orbits(&mut writer, &orbits) {
        error!("failed to format results: {}", e);
        exit(1);
    }

    info!(
        "{} orbital states stored in \"{}\"",
        orbits.len(),
        cli.output.display()
    );
}
