use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use medicitas_lib::config::DEFAULT_API_URL;
use medicitas_lib::reporter::{run_report, ReportConfig, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Parser)]
#[command(
    name = "medicitas-report",
    version,
    about = "Offline analytics over the appointment booking API"
)]
struct Cli {
    /// Base URL of a running booking API
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory for the chart and CSV export
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Skip the SVG dashboard
    #[arg(long)]
    no_chart: bool,

    /// Seconds to wait for the API
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

fn main() -> ExitCode {
    medicitas_lib::init_tracing();
    let cli = Cli::parse();

    let report_config = ReportConfig {
        api_url: cli.api_url,
        out_dir: cli.out_dir,
        chart: !cli.no_chart,
        timeout_secs: cli.timeout,
    };

    let stdout = std::io::stdout();
    match run_report(&report_config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
