//! CLI argument definitions.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pools` | List opened or all pools |
//! | `pool` | Show one pool in detail |
//! | `miners` | List miners reporting to a pool |
//! | `plots` | List plots registered with a pool |
//! | `income` | List mining-income records for a pool |
//! | `assets` | Show per-coin account balances |
//!
//! # Global Options
//!
//! | Option | Fallback | Description |
//! |--------|----------|-------------|
//! | `--token` | `HPOOL_ACCESS_TOKEN` | Account access token |
//! | `--base-url` | `HPOOL_API_BASE` | API base url |
//! | `--timeout-ms` | `HPOOL_TIMEOUT_MS` | Request timeout |
//! | `--debug` | - | Dump requests and responses to stderr |
//! | `--format` | `json` | `json` or `ndjson` |
//! | `--pretty` | - | Indent JSON output |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Query an HPool mining-pool account from the command line.
#[derive(Debug, Parser)]
#[command(name = "hpool", author, version, about = "HPool mining-pool API client")]
pub struct Cli {
    /// Account access token. Falls back to HPOOL_ACCESS_TOKEN.
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// API base url. Falls back to HPOOL_API_BASE.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds. Falls back to HPOOL_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Dump every request and response to stderr.
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON document.
    Json,
    /// One JSON record per line.
    Ndjson,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List pools.
    ///
    ///   hpool pools
    ///   hpool pools --type all
    Pools(PoolsArgs),

    /// Show one pool in detail.
    Pool(PoolArgs),

    /// List miners reporting to a pool.
    Miners(PoolArgs),

    /// List plots registered with a pool (first 100).
    Plots(PoolArgs),

    /// List mining-income records for a pool (first 100).
    Income(PoolArgs),

    /// Show account balances per coin.
    Assets,
}

#[derive(Debug, Args)]
pub struct PoolsArgs {
    /// Which pools to list: opened or all.
    #[arg(long = "type", default_value = "opened")]
    pub pool_type: String,
}

#[derive(Debug, Args)]
pub struct PoolArgs {
    /// Pool identifier as used by the API (e.g. chia).
    pub pool: String,
}
