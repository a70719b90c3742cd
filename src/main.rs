use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lca_rmq::bench::{self, format_duration, BenchConfig};
use lca_rmq::{Lca, RmqKind, RootedTree};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lca-rmq", about = "Range minimum queries via Cartesian trees and Euler tours")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Time every strategy on random data and check it against a linear scan.
    Bench {
        /// Number of elements in the generated sequence.
        #[arg(long, default_value_t = 20_000)]
        size: usize,
        /// Number of random queries.
        #[arg(long, default_value_t = 1_000_000)]
        queries: usize,
        /// Seed for data and queries.
        #[arg(long, default_value_t = 19_082_017)]
        seed: u64,
        /// Strategies to run (default: all).
        #[arg(long = "strategy", value_enum)]
        strategies: Vec<RmqKind>,
        /// Largest input the quadratic naive table is built for.
        #[arg(long, default_value_t = 5_000)]
        naive_limit: usize,
    },
    /// Answer range minimum queries over a sequence file.
    Query {
        /// Whitespace-separated integers.
        data: PathBuf,
        /// Strategy used to answer the queries.
        #[arg(long, value_enum, default_value_t = RmqKind::Cartesian)]
        strategy: RmqKind,
        /// Ranges as `i:j` (inclusive, 0-based).
        #[arg(required = true)]
        ranges: Vec<String>,
    },
    /// Answer lowest-common-ancestor queries over a parent file.
    Lca {
        /// One parent index per node, `-` for the root.
        tree: PathBuf,
        /// Node pairs as `u:v`.
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            size,
            queries,
            seed,
            strategies,
            naive_limit,
        } => {
            let config = BenchConfig {
                data_size: size,
                queries,
                seed,
                strategies: if strategies.is_empty() {
                    RmqKind::ALL.to_vec()
                } else {
                    strategies
                },
                naive_limit,
            };
            run_bench(&config)?
        }
        Commands::Query {
            data,
            strategy,
            ranges,
        } => run_query(&data, strategy, &ranges)?,
        Commands::Lca { tree, pairs } => run_lca(&tree, &pairs)?,
    }

    Ok(())
}

fn run_bench(config: &BenchConfig) -> Result<()> {
    println!("   Size: {}", config.data_size);
    println!("Queries: {}", config.queries);

    let reports = bench::run(config).context("invalid benchmark configuration")?;
    for report in reports {
        println!("\n*** {} ***", report.kind);
        println!("P: {}", format_duration(report.timing.preprocess));
        println!("Q: {}", format_duration(report.timing.query));
        if let Some(verified) = &report.verified {
            println!("C: {}", if verified.is_ok() { "Yes" } else { "No" });
        }
    }

    Ok(())
}

fn run_query(path: &Path, strategy: RmqKind, ranges: &[String]) -> Result<()> {
    let data = read_sequence_file(path)
        .with_context(|| format!("failed to read sequence from {}", path.display()))?;
    if data.is_empty() {
        bail!("sequence file {} is empty", path.display());
    }
    if strategy.requires_plus_minus() && data.windows(2).any(|w| w[0].abs_diff(w[1]) != 1) {
        bail!("strategy '{}' needs neighbouring values to differ by exactly 1", strategy);
    }

    let pairs = ranges
        .iter()
        .map(|r| parse_pair(r, data.len()))
        .collect::<Result<Vec<_>>>()?;

    let mut rmq = strategy.instantiate(&data);
    rmq.preprocess();

    for (i, j) in pairs {
        let (i, j) = (i.min(j), i.max(j));
        let index = rmq.query(i, j);
        println!("{}\t{}\t{}\t{}", i, j, index, data[index]);
    }

    Ok(())
}

fn run_lca(path: &Path, pairs: &[String]) -> Result<()> {
    let parents = read_parent_file(path)
        .with_context(|| format!("failed to read tree from {}", path.display()))?;
    let tree = RootedTree::new(parents)
        .with_context(|| format!("{} does not describe a rooted tree", path.display()))?;

    let mut lca = Lca::new(&tree);
    let pairs = pairs
        .iter()
        .map(|p| parse_pair(p, lca.tree().len()))
        .collect::<Result<Vec<_>>>()?;

    lca.preprocess();

    for (u, v) in pairs {
        println!("{}\t{}\t{}", u, v, lca.query(u, v));
    }

    Ok(())
}

fn read_sequence_file(path: &Path) -> Result<Vec<i64>> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .split_whitespace()
        .enumerate()
        .map(|(idx, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid value '{}' at position {}", token, idx))
        })
        .collect()
}

fn read_parent_file(path: &Path) -> Result<Vec<Option<usize>>> {
    let contents = std::fs::read_to_string(path)?;
    contents
        .split_whitespace()
        .enumerate()
        .map(|(node, token)| match token {
            "-" => Ok(None),
            _ => token
                .parse::<usize>()
                .map(Some)
                .with_context(|| format!("invalid parent '{}' for node {}", token, node)),
        })
        .collect()
}

fn parse_pair(text: &str, len: usize) -> Result<(usize, usize)> {
    let (a, b) = text
        .split_once(':')
        .ok_or_else(|| anyhow::anyhow!("expected 'a:b', got '{}'", text))?;
    let a: usize = a
        .trim()
        .parse()
        .with_context(|| format!("invalid index '{}' in '{}'", a, text))?;
    let b: usize = b
        .trim()
        .parse()
        .with_context(|| format!("invalid index '{}' in '{}'", b, text))?;
    if a >= len || b >= len {
        bail!("'{}' is out of range for {} elements", text, len);
    }
    Ok((a, b))
}
