use clap::Parser;
use step_calc::utils::{logger, validation::Validate};
use step_calc::{successor_for, CalcEngine, CliConfig, DecrementStep, UnaryCalculator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting step-calc CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let emit_json = config.json;

    let succ = successor_for(config.step_version);
    let calculator = UnaryCalculator::new(succ, DecrementStep);
    let engine = CalcEngine::new(calculator, config);

    match engine.run() {
        Ok(outcome) => {
            tracing::info!("✅ Evaluation completed successfully");
            if emit_json {
                println!("{}", outcome.to_json()?);
            } else {
                println!(
                    "{} {} {} = {}",
                    outcome.lhs,
                    outcome.operation.symbol(),
                    outcome.rhs.unsigned_abs(),
                    outcome.result
                );
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Evaluation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                step_calc::utils::error::ErrorSeverity::Low => 0,
                step_calc::utils::error::ErrorSeverity::Medium => 2,
                step_calc::utils::error::ErrorSeverity::High => 1,
                step_calc::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
