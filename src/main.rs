use anyhow::Context;
use clap::Parser;
use revisao_poo::utils::{logger, validation::Validate};
use revisao_poo::{render, CliConfig, Client, DemoError, Driver, TomlConfig};

fn fail(e: &DemoError) -> ! {
    tracing::debug!("Failing with: {:?}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn load_scenario(path: &str) -> revisao_poo::Result<TomlConfig> {
    let scenario = TomlConfig::from_file(path)?;
    scenario.validate()?;
    Ok(scenario)
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }
    let output = config.output_format().unwrap_or_else(|e| fail(&e));

    let client: Client = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            let scenario = load_scenario(path).unwrap_or_else(|e| fail(&e));
            Driver::new(scenario).run()
        }
        None => Driver::new(config.clone()).run(),
    };

    let text = render(&client, output).context("rendering client")?;
    println!("{}", text);
    Ok(())
}
