use std::net::IpAddr;
use std::process::ExitCode;

use clap::Parser;
use medicitas_lib::config::ServerConfig;

#[derive(Debug, Parser)]
#[command(
    name = "medicitas",
    version,
    about = "Medical appointment booking API",
    long_about = "Serves the appointment booking API with in-memory stores.\n\n\
        Host and port default to MEDICITAS_HOST / MEDICITAS_PORT, then 0.0.0.0:8001."
)]
struct Cli {
    /// Address to bind
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    medicitas_lib::init_tracing();
    let cli = Cli::parse();

    let mut config = ServerConfig::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    match medicitas_lib::run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
