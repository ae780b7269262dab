mod pools;
mod records;

use hpool_core::config::{ENV_ACCESS_TOKEN, ENV_BASE_URL, ENV_TIMEOUT_MS};
use hpool_core::{ClientConfig, HpoolClient};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = HpoolClient::from_config(resolve_config(cli, |key| std::env::var(key).ok())?);

    match &cli.command {
        Command::Pools(args) => pools::list(&client, args).await,
        Command::Pool(args) => pools::detail(&client, args).await,
        Command::Miners(args) => records::miners(&client, args).await,
        Command::Plots(args) => records::plots(&client, args).await,
        Command::Income(args) => records::income(&client, args).await,
        Command::Assets => records::assets(&client).await,
    }
}

/// Command-line values win over environment variables.
fn resolve_config<F>(cli: &Cli, env: F) -> Result<ClientConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = ClientConfig::from_lookup(|key| match key {
        ENV_ACCESS_TOKEN => cli.token.clone().or_else(|| env(key)),
        ENV_BASE_URL => cli.base_url.clone().or_else(|| env(key)),
        ENV_TIMEOUT_MS => cli.timeout_ms.map(|ms| ms.to_string()).or_else(|| env(key)),
        _ => env(key),
    })?;

    Ok(config.with_debug(cli.debug))
}
