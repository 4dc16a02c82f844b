use clap::Parser;
use step_calc::config::toml_config::TomlConfig;
use step_calc::core::ConfigProvider;
use step_calc::utils::{logger, validation::Validate};
use step_calc::{successor_for, CalcEngine, DecrementStep, StepVersion, UnaryCalculator};

#[derive(Parser)]
#[command(name = "toml-calc")]
#[command(about = "Unary step calculator driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "calc-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the successor release from the config file
    #[arg(long)]
    step_version: Option<StepVersion>,

    /// Dry run - show what would be evaluated without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based calculator");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(version) = args.step_version {
        config.dependency.step_version = version;
        tracing::info!("🔧 Step version overridden to: {}", version);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No evaluation will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let succ = successor_for(config.step_version());
    let calculator = UnaryCalculator::new(succ, DecrementStep);
    let engine = CalcEngine::new(calculator, config);

    match engine.run() {
        Ok(outcome) => {
            tracing::info!("✅ Evaluation completed successfully");
            println!("✅ Evaluation completed successfully!");
            println!(
                "🧮 {} {} {} = {} ({} steps)",
                outcome.lhs,
                outcome.operation.symbol(),
                outcome.rhs.unsigned_abs(),
                outcome.result,
                outcome.steps_applied
            );
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Calculation: {} {} {}",
        config.calculator.lhs,
        config.calculator.operation.symbol(),
        config.calculator.rhs.unsigned_abs()
    );
    println!(
        "  Dependency: {} ({})",
        config.dependency.package,
        config.step_version()
    );
    println!("  Max Steps: {}", config.max_steps());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("🧮 Evaluation Plan:");
    println!("  Operation: {}", config.operation());
    println!("  Operands: lhs = {}, rhs = {}", config.lhs(), config.rhs());

    let steps = config.rhs().unsigned_abs();
    let step_name = match config.operation() {
        step_calc::Operation::Add => "successor",
        step_calc::Operation::Sub => "predecessor",
    };
    println!("  Unary steps needed: {} {} applications", steps, step_name);

    println!();
    println!("📦 Dependency Resolution:");
    println!("  Package: {}", config.dependency.package);
    println!("  Release: {}", config.step_version());

    println!();
    if steps > config.max_steps() {
        println!(
            "⚠️ Would be rejected: {} steps exceed the limit of {}",
            steps,
            config.max_steps()
        );
    } else {
        println!(
            "✅ Within budget: {} of {} allowed steps",
            steps,
            config.max_steps()
        );
    }
}
