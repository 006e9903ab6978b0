use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use segmenter::logger::init_logger;
use segmenter::{analyze, EmptyClusterPolicy, KMeansConfig, ProfileDescriber, SeedingStrategy};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Seeding {
    Strided,
    Random,
    #[value(name = "kmeans++")]
    KMeansPlusPlus,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EmptyCluster {
    Retain,
    ReseedFarthest,
}

/// Segment two-column CSV data into K groups.
#[derive(Parser, Debug)]
#[command(name = "segmenter")]
#[command(about = "K-means segmentation of two-column numeric data")]
struct Args {
    /// CSV file with a header row; reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Number of clusters.
    #[arg(short, long, default_value = "5")]
    k: usize,

    #[arg(long, default_value_t = segmenter::config::DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    #[arg(long, value_enum, default_value = "strided")]
    seeding: Seeding,

    /// Seed for random and kmeans++ seeding; entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "retain")]
    empty_cluster: EmptyCluster,

    /// Independent initializations; the lowest inertia wins.
    #[arg(long, default_value = "1")]
    n_init: usize,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn config(&self) -> KMeansConfig {
        let seeding = match self.seeding {
            Seeding::Strided => SeedingStrategy::Strided,
            Seeding::Random => SeedingStrategy::Random { seed: self.seed },
            Seeding::KMeansPlusPlus => SeedingStrategy::KMeansPlusPlus { seed: self.seed },
        };
        let policy = match self.empty_cluster {
            EmptyCluster::Retain => EmptyClusterPolicy::RetainPrevious,
            EmptyCluster::ReseedFarthest => EmptyClusterPolicy::ReseedFarthest,
        };
        KMeansConfig::default()
            .with_max_iterations(self.max_iterations)
            .with_seeding(seeding)
            .with_empty_cluster_policy(policy)
            .with_n_init(self.n_init)
    }
}

fn read_input(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn run(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    let text = read_input(args.input.as_ref())?;
    let analysis = analyze(&text, args.k, &args.config(), &ProfileDescriber)?;
    let report = analysis.report();
    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = init_logger(args.log_level) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    match run(&args) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
