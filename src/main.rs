use clap::error::ErrorKind;
use clap::Parser;
use upstream_domains::core::extract::emit_rules;
use upstream_domains::core::summary::{render_json, render_text};
use upstream_domains::core::ConfigProvider;
use upstream_domains::utils::{logger, validation::Validate};
use upstream_domains::{CliConfig, ExtractEngine, ExtractError, LocalSource, StatsFormat};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // 參數錯誤一律以 1 結束，用法說明寫到 stderr
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    if let Err(e) = run(&config) {
        fail(e);
    }
}

fn run(config: &CliConfig) -> Result<(), ExtractError> {
    let engine = ExtractEngine::new(LocalSource::new());
    let report = engine.run(&config.source_dirs());

    emit_rules(&report.domains, config.output_path())?;

    match config.stats {
        Some(StatsFormat::Text) => eprintln!("{}", render_text(&report.stats)),
        Some(StatsFormat::Json) => eprintln!("{}", render_json(&report.stats)?),
        None => {}
    }

    Ok(())
}

fn fail(e: ExtractError) -> ! {
    tracing::error!(
        "❌ Extraction failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
