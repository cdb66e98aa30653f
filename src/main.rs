use anyhow::Context;
use clap::Parser;
use dock_plugin::core::preflight;
use dock_plugin::utils::{logger, validation::Validate};
use dock_plugin::{AppContext, CliArgs, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_logger(args.verbose, args.log_json);

    tracing::info!("🚀 Starting dock-plugin");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let config = match args.to_server_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - server will not be started");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    if let Err(e) = dock_plugin::serve(&config).await {
        tracing::error!("❌ Server stopped with error: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn display_config_summary(config: &ServerConfig) {
    tracing::info!("📋 Configuration:");
    tracing::info!("   bind: {}", config.bind_addr());
    tracing::info!("   manifests: {}", config.manifest_dir.display());
    tracing::info!(
        "   files: {} / {}",
        config.plugin_manifest,
        config.api_schema
    );
    tracing::info!("   scorer: {:?}", config.scorer);
    if let Some(endpoint) = &config.scorer_endpoint {
        tracing::info!("   scorer endpoint: {}", endpoint);
    }
    if let Some(timeout) = config.scorer_timeout() {
        tracing::info!("   scorer timeout: {:?}", timeout);
    }
}

async fn perform_dry_run(config: &ServerConfig) -> anyhow::Result<()> {
    let ctx = AppContext::from_config(config).context("failed to build application context")?;

    let statuses = preflight::check_manifests(ctx.manifests())
        .await
        .context("manifest preflight failed")?;

    for status in &statuses {
        println!(
            "✅ {} -> {} ({} bytes)",
            status.kind.well_known_path(),
            status.location,
            status.size_bytes
        );
    }
    println!("✅ Configuration OK, scorer: {}", ctx.scorer().name());
    Ok(())
}
