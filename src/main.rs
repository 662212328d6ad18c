use clap::Parser;
use eyea_admin::cli::{Cli, execute_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    execute_command(&cli).await?;
    Ok(())
}
