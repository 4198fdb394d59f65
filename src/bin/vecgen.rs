use std::error::Error;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u256_vectors::{write_vectors, OverflowPolicy};

/// Print random 256-bit addition vectors: `<rand_u32> <t0> <t0+1> <t0+rand_u32>`.
#[derive(Parser)]
struct Args {
    /// Number of lines to print.
    #[clap(env = "VECGEN_COUNT", default_value_t = 1_000_000)]
    count: u64,

    /// Seed for reproducible output. Drawn from the OS when absent.
    #[clap(long, env = "VECGEN_SEED")]
    seed: Option<u64>,

    /// What to print when a sum needs more than 256 bits.
    #[clap(long, value_enum, default_value_t = OverflowPolicy::Wrap)]
    overflow: OverflowPolicy,

    /// Write to a file instead of stdout.
    #[clap(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdout = io::stdout();
    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => BufWriter::new(Box::new(File::create(path)?)),
        None => BufWriter::new(Box::new(stdout.lock())),
    };

    info!("gen {} vectors, overflow policy {:?}", args.count, args.overflow);
    let now = Instant::now();
    let written = write_vectors(&mut rng, &mut writer, args.count, args.overflow)?;
    info!("wrote {} vectors in {:.2?}", written, now.elapsed());

    Ok(())
}
