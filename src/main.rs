use clap::Parser;
use movie_night::utils::error::{ErrorSeverity, MovieNightError};
use movie_night::utils::{display, input, logger};
use movie_night::{builtin_catalog, CliConfig, RecommendationEngine, Settings};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 先載入配置，日誌等級可能來自配置檔
    let settings = match cli.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let level = settings.log_level.as_deref();
    if cli.log_json {
        logger::init_json_logger(cli.verbose, level);
    } else {
        logger::init_cli_logger(cli.verbose, level);
    }

    tracing::info!("Starting movie-night");
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = run(&cli, &settings) {
        tracing::error!(
            "❌ Recommendation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }

    Ok(())
}

fn exit_code(e: &MovieNightError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(cli: &CliConfig, settings: &Settings) -> Result<(), MovieNightError> {
    let catalog = builtin_catalog()?;
    let engine = RecommendationEngine::new(catalog);

    let raw = if cli.wants_prompt() {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        input::prompt_preferences(&mut stdin.lock(), &mut stdout)?
    } else {
        cli.raw_preferences()
    };
    let query = raw.into_query(settings);

    let recommendations = engine.run(&query);
    let rendered = display::render(&recommendations, settings)?;

    if settings.output_format == "text" {
        println!();
    }
    println!("{}", rendered);

    Ok(())
}
