//! Offline analytics over the booking API.
//!
//! Pulls every appointment from a running server, prints a general and an
//! advanced summary, renders a six-panel SVG dashboard and exports the
//! enriched table as CSV.

pub mod chart;
pub mod export;
pub mod fetch;
pub mod summary;
pub mod table;

use std::io::Write;
use std::path::PathBuf;

use crate::config;

pub const CHART_FILE: &str = "analisis_citas_medicas.svg";
pub const CSV_FILE: &str = "citas_exportadas.csv";

/// Seconds to wait for the API before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const RULE_WIDTH: usize = 60;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Could not reach the API at {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("API responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid API response: {0}")]
    Decode(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("No appointments to analyze")]
    EmptyDataset,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chart rendering failed: {0}")]
    Chart(String),
}

impl ReportError {
    /// Outcomes that end the report with a notice instead of a failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Status { .. } | Self::EmptyDataset
        )
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub api_url: String,
    pub out_dir: PathBuf,
    pub chart: bool,
    pub timeout_secs: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            api_url: config::DEFAULT_API_URL.to_string(),
            out_dir: PathBuf::from("."),
            chart: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// What a report run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    Completed {
        rows: usize,
        chart: Option<PathBuf>,
        csv: PathBuf,
    },
    /// Ended early with a notice (API down, HTTP error, nothing to analyze).
    Skipped,
}

/// Run the whole report, writing console output to `out`.
pub fn run_report(
    report_config: &ReportConfig,
    out: &mut dyn Write,
) -> Result<ReportOutcome, ReportError> {
    match generate(report_config, out) {
        Ok(outcome) => Ok(outcome),
        Err(e) if e.is_recoverable() => {
            tracing::warn!("Report skipped: {e}");
            write_notice(&e, out)?;
            Ok(ReportOutcome::Skipped)
        }
        Err(e) => Err(e),
    }
}

fn generate(
    report_config: &ReportConfig,
    out: &mut dyn Write,
) -> Result<ReportOutcome, ReportError> {
    writeln!(out, "Conectando con la API...")?;
    let client = fetch::ApiClient::new(&report_config.api_url, report_config.timeout_secs)?;
    let records = client.fetch_appointments()?;
    writeln!(out, "Se obtuvieron {} citas\n", records.len())?;

    let table = table::AppointmentTable::from_records(records)?;
    if table.skipped() > 0 {
        writeln!(
            out,
            "Se omitieron {} citas con fecha inválida",
            table.skipped()
        )?;
    }

    write!(out, "{}", summary::general(&table))?;
    write!(out, "{}", summary::advanced(&table))?;

    std::fs::create_dir_all(&report_config.out_dir)?;

    let chart_path = if report_config.chart {
        writeln!(out, "\nGenerando visualizaciones...")?;
        let path = report_config.out_dir.join(CHART_FILE);
        chart::render(&table, &path)?;
        writeln!(out, "Visualizaciones guardadas en '{}'", path.display())?;
        Some(path)
    } else {
        None
    };

    let csv_path = report_config.out_dir.join(CSV_FILE);
    export::write_csv(&table, &csv_path)?;
    writeln!(out, "\nDatos exportados a '{}'", csv_path.display())?;

    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "ANÁLISIS COMPLETADO")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    tracing::info!(rows = table.len(), "Report completed");
    Ok(ReportOutcome::Completed {
        rows: table.len(),
        chart: chart_path,
        csv: csv_path,
    })
}

fn write_notice(err: &ReportError, out: &mut dyn Write) -> std::io::Result<()> {
    match err {
        ReportError::Connection { url, reason } => {
            writeln!(
                out,
                "Error de conexión: no se pudo contactar la API en {url} ({reason})"
            )?;
        }
        ReportError::Status { status, .. } => {
            writeln!(out, "Error al obtener datos de la API (HTTP {status})")?;
        }
        _ => {}
    }
    writeln!(out, "No hay datos para analizar. Asegúrate de que:")?;
    writeln!(out, "   1. El servidor de citas esté corriendo (medicitas)")?;
    writeln!(out, "   2. Existan citas agendadas en el sistema")
}
