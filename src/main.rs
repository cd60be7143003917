use clap::Parser;
use kimsufi_checker::utils::{logger, validation::Validate};
use kimsufi_checker::{AvailabilityClient, CheckEngine, CheckOutcome, CliConfig, SmtpNotifier};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting kimsufi-checker");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    // 創建檢查引擎並運行
    let client = AvailabilityClient::new(config.endpoint.clone());
    let notifier = config
        .mail
        .then(|| SmtpNotifier::new(config.mail_config_path()));
    let engine = CheckEngine::new(client, notifier);

    match engine.run(&config.models).await {
        Ok(CheckOutcome::NothingAvailable) => {
            tracing::info!("no server available, nothing reported");
        }
        Ok(CheckOutcome::Reported {
            available_total,
            mail,
        }) => {
            tracing::info!(
                "✅ reported {} available server(s), mail: {:?}",
                available_total,
                mail
            );
        }
        Err(e) => {
            // 記錄詳細錯誤信息並以非零退出碼結束
            tracing::error!("❌ Availability check failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
