use clap::Parser;
use job_board::shell::presenter::presenter_for;
use job_board::utils::{logger, validation::Validate};
use job_board::{CliConfig, DisplayFormat, JobStore, Shell};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // The store lives for the whole process and is lent to the shell.
    let mut store = JobStore::new();

    match config.preload_seed(&mut store) {
        Ok(Some(count)) => tracing::info!("Preloaded {} jobs from {:?}", count, config.seed_path()),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Seed rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), presenter_for(config.display.format));
    if config.display.format == DisplayFormat::Json {
        // stdout stays newline-delimited JSON
        shell = shell.with_prompt_writer(Box::new(std::io::stderr()));
    }
    shell.run(&mut store)?;

    tracing::debug!(jobs = store.len(), "session finished");
    Ok(())
}
