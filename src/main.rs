use clap::{CommandFactory, Parser};
use commit_mail_finder::utils::{logger, validation::Validate};
use commit_mail_finder::{CliConfig, GithubClient, Harvester};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting commit-mail-finder");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = GithubClient::new(&config.api_base, config.token.clone());
    let harvester = Harvester::new(client);

    let Some(emails) = harvester.harvest(&config).await else {
        CliConfig::command().print_help()?;
        return Ok(());
    };

    if !emails.is_empty() {
        println!("Found email addresses:");
        for email in &emails {
            println!("{}", email);
        }
    }

    Ok(())
}
