use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-factory")]
#[command(about = "A small demonstration of factory-built product families")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
