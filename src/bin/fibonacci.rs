use anyhow::{Context, Result};
use block_bignum::{Multiplier, MultiplicationConfig, fibonacci};
use clap::{Parser, ValueEnum};
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fibonacci")]
#[command(about = "Compute Fibonacci numbers with radix-10^18 block arithmetic", long_about = None)]
#[command(version)]
struct Cli {
    /// Index n of F(n) to compute
    #[arg(default_value_t = 1_000)]
    n: u64,

    /// Computation method
    #[arg(long, value_enum, default_value = "matrix")]
    method: Method,

    /// Print only the number of decimal digits
    #[arg(long)]
    digits_only: bool,

    /// Instead of F(n), count how many recurrence steps finish within this many milliseconds
    #[arg(long)]
    budget_ms: Option<u64>,

    /// Multiplication config as JSON, e.g. '{"standard_threshold": 64}'
    #[arg(long, env = "BLOCK_BIGNUM_CONFIG")]
    config: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// F(k+1) = F(k) + F(k-1)
    Iterative,
    /// Repeated squaring of [[1, 1], [1, 0]]
    Matrix,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(json) => MultiplicationConfig::from_json(json).context("Failed to load --config")?,
        None => MultiplicationConfig::default(),
    };
    let multiplier = Multiplier::new(config).context("Invalid multiplication config")?;
    debug!(?config, "multiplier ready");

    if let Some(ms) = cli.budget_ms {
        let steps = steps_within(Duration::from_millis(ms));
        info!(steps, budget_ms = ms, "recurrence steps completed");
        println!("{steps}");
        return Ok(());
    }

    let start = Instant::now();
    let value = match cli.method {
        Method::Iterative => fibonacci::fibonacci_iterative(cli.n),
        Method::Matrix => fibonacci::fibonacci_matrix_with(cli.n, &multiplier),
    };
    info!(
        n = cli.n,
        method = ?cli.method,
        digits = value.digit_count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "computed"
    );

    if cli.digits_only {
        println!("{}", value.digit_count());
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Runs the naive recurrence until `budget` elapses and returns the index reached.
fn steps_within(budget: Duration) -> u64 {
    let start = Instant::now();
    let mut previous = block_bignum::BlockNumber::zero();
    let mut current = block_bignum::BlockNumber::one();
    let mut steps = 0u64;
    while start.elapsed() < budget {
        let next = &previous + &current;
        previous = std::mem::replace(&mut current, next);
        steps += 1;
    }
    steps
}
