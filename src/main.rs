use anyhow::Context;
use clap::Parser;
use item_search::utils::{logger, validation::Validate};
use item_search::{CliConfig, ConnectionProbe, SearchError, TomlConfig};

fn exit_with(e: &SearchError) -> ! {
    tracing::error!("❌ Connection check failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let file_config = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?
                .with_verify_connectivity(cli.ping),
        ),
        None => None,
    };

    // the logging section is only trusted once the whole config is valid
    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        exit_with(&e);
    }

    let configured_level = file_config.as_ref().and_then(|c| c.log_level());
    let level = logger::effective_level(cli.verbose, configured_level);
    if cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(level);
    }

    tracing::info!("Starting item-search connection check");
    if let (true, Some(configured)) = (cli.verbose, configured_level) {
        tracing::info!("--verbose overrides logging.level = {}", configured);
    }
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut stdout = std::io::stdout();
    let result = match file_config {
        Some(config) => ConnectionProbe::new(config).run(&mut stdout).await,
        None => ConnectionProbe::new(cli).run(&mut stdout).await,
    };

    match result {
        Ok(report) => {
            if report.reachable == Some(false) {
                tracing::warn!("⚠️ Node did not answer the ping successfully");
                std::process::exit(2);
            }
            tracing::info!("✅ Connection check completed");
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}
