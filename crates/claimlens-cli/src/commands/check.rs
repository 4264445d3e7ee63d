//! Check command implementation.

use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use claimlens_analysis::FactCheckTool;
use claimlens_spotter::ClaimBusterClient;
use tracing::debug;

/// Execute the check command.
pub async fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if args.claim.trim().is_empty() {
        return Err(CliError::InvalidInput("Claim text is empty".to_string()));
    }

    // Flag > config file > environment handled by clap for the key itself
    let api_key = args
        .api_key
        .or_else(|| config.api.api_key.clone())
        .ok_or(CliError::MissingApiKey)?;

    let mut check_config = config.check.clone();
    if let Some(low) = args.low_threshold {
        check_config.low_threshold = low;
    }
    if let Some(high) = args.high_threshold {
        check_config.high_threshold = high;
    }
    if let Some(batch_size) = args.batch_size {
        check_config.batch_size = batch_size;
    }
    if args.summary_only {
        check_config.detailed_analysis = false;
    }

    let max_rpm = args.max_rpm.unwrap_or(config.api.max_requests_per_minute);
    let mut client = ClaimBusterClient::new(api_key).with_rate_limit(max_rpm);
    if let Some(endpoint) = args.endpoint.or_else(|| config.api.endpoint.clone()) {
        debug!("Using custom endpoint {}", endpoint);
        client = client.with_endpoint(endpoint);
    }

    let tool = FactCheckTool::new(client, check_config)?;
    let report = tool.check(&args.claim).await?;

    println!("{}", formatter.format_report(&report)?);

    Ok(())
}
