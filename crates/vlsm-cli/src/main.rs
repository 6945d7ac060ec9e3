mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vlsm_core::Demand;

#[derive(Parser)]
#[command(name = "vlsm-cli")]
#[command(about = "IPv4 subnet calculator and VLSM allocation planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate subnet details for an address and prefix
    Calc {
        /// IPv4 address (e.g. 192.168.1.0)
        #[arg(long)]
        ip: String,
        /// CIDR prefix length (e.g. 24)
        #[arg(long)]
        prefix: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the standard block size catalog
    Blocks {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Plan a VLSM allocation for a list of department demands
    Plan {
        /// Usable host capacity of the pool
        #[arg(long)]
        pool: u64,
        /// Department demand as NAME:HOSTS (repeatable, order is kept)
        #[arg(long = "dept", value_parser = commands::parse_demand, required = true)]
        departments: Vec<Demand>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Plan an allocation and lay out contiguous ranges from a base address
    Ranges {
        /// Base address the first block starts at (e.g. 10.0.0.0)
        #[arg(long)]
        base: String,
        /// Usable host capacity of the pool
        #[arg(long)]
        pool: u64,
        /// Department demand as NAME:HOSTS (repeatable, order is kept)
        #[arg(long = "dept", value_parser = commands::parse_demand, required = true)]
        departments: Vec<Demand>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { ip, prefix, json } => commands::calc::run(&ip, &prefix, json),
        Commands::Blocks { json } => commands::blocks::run(json),
        Commands::Plan {
            pool,
            departments,
            json,
        } => commands::plan::run(pool, &departments, json),
        Commands::Ranges {
            base,
            pool,
            departments,
            json,
        } => commands::ranges::run(&base, pool, &departments, json),
    }
}
