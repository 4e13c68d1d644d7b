use aero_server::ServerConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    aero_server::serve(&config).await?;
    Ok(())
}
