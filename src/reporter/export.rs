use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::table::AppointmentTable;
use super::ReportError;

const HEADER: [&str; 13] = [
    "id",
    "paciente",
    "cedula",
    "telefono",
    "centro_salud",
    "especialidad",
    "fecha",
    "hora",
    "motivo",
    "estado",
    "dia_semana",
    "mes",
    "semana",
];

/// Quote a field when it contains a separator, a quote or a line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_record<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line: Vec<Cow<'_, str>> = fields.iter().map(|f| escape(f)).collect();
    writeln!(out, "{}", line.join(","))
}

/// Write `table` as CSV: the appointment fields plus weekday, month and ISO week.
pub fn write_csv(table: &AppointmentTable, path: &Path) -> Result<(), ReportError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_record(&mut out, &HEADER)?;

    for row in table.rows() {
        let appt = &row.appointment;
        let id = appt.id.to_string();
        let week = row.iso_week().to_string();
        write_record(
            &mut out,
            &[
                id.as_str(),
                appt.patient_name.as_str(),
                appt.owner_id.as_deref().unwrap_or(""),
                appt.phone.as_str(),
                appt.center.as_str(),
                appt.specialty.as_str(),
                appt.date.as_str(),
                appt.time.as_str(),
                appt.reason.as_str(),
                appt.status.as_str(),
                row.weekday_name(),
                row.month_name(),
                week.as_str(),
            ],
        )?;
    }

    out.flush()?;
    tracing::debug!(path = %path.display(), rows = table.len(), "CSV written");
    Ok(())
}
