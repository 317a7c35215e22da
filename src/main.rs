use clap::Parser;
use small_factory::utils::logger;
use small_factory::{CliConfig, Client, Factory1, Factory2};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-factory demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut stdout = std::io::stdout();

    println!("Client: Testing client code with the first factory type:");
    Client::new(Factory1).run(&mut stdout)?;

    println!();
    println!("Client: Testing the same client code with the second factory type:");
    Client::new(Factory2).run(&mut stdout)?;

    Ok(())
}
