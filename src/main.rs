use anyhow::Error;
use clap::Parser;

use budget_buddy::cli::{command, Cli, Commands};
use budget_buddy::telemetry::{get_subscriber, init_subscriber};

fn main() -> Result<(), Error> {
    let subscriber = get_subscriber("budget-buddy".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let cli = Cli::parse();

    match &cli.command {
        Commands::Summary { file } => {
            command::summary(file)?;
        }

        Commands::Chart { file, output } => {
            command::chart(file, output.as_deref())?;
        }
    }

    Ok(())
}
