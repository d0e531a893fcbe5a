use std::io;

use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use cupcake_app::app::CupcakeApp;
use cupcake_core::PricePolicy;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Cupcake order flow in the terminal.
///
/// Walks one order from quantity to summary and "shares" the finished
/// order by printing it.
#[derive(Debug, Parser)]
struct Cli {
    /// Price of a single cupcake, in dollars.
    #[arg(long, default_value = "2.00")]
    unit_price: Decimal,

    /// Flat premium for same-day pickup, in dollars.
    #[arg(long, default_value = "3.00")]
    same_day_surcharge: Decimal,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let policy = PricePolicy {
        unit_price: cli.unit_price,
        same_day_surcharge: cli.same_day_surcharge,
    };

    let stdin = io::stdin();
    let mut app = CupcakeApp::new(policy);
    app.run(stdin.lock(), io::stdout())
}
