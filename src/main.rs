use clap::Parser;
use small_calc::utils::logger;
use small_calc::{Calculator, CliConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let calc = Calculator::new();

    match config.operation.evaluate(&calc) {
        Ok(result) => {
            tracing::info!("{} -> {}", config.operation.name(), result);
            if config.json {
                let payload = serde_json::json!({
                    "operation": config.operation.name(),
                    "result": result,
                });
                println!("{}", payload);
            } else {
                println!("{}", result);
            }
        }
        Err(e) => {
            tracing::error!("{} failed: {}", config.operation.name(), e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
