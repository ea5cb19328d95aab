//! Console summaries of an appointment table.

use std::fmt;

use chrono::NaiveDate;

use crate::stats::Tally;

use super::table::{AppointmentTable, Column};

const RULE: &str = "============================================================";
const TOP_COMBINATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneralSummary {
    pub total: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub by_center: Tally,
    pub by_specialty: Tally,
    pub by_status: Tally,
    pub by_weekday: Tally,
}

pub fn general(table: &AppointmentTable) -> GeneralSummary {
    GeneralSummary {
        total: table.len(),
        date_range: table.date_range(),
        by_center: table.tally(Column::Center),
        by_specialty: table.tally(Column::Specialty),
        by_status: table.tally(Column::Status),
        by_weekday: table.tally(Column::Weekday),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Combination {
    pub specialty: String,
    pub center: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedSummary {
    pub top_center: Option<String>,
    pub top_specialty: Option<String>,
    pub top_weekday: Option<String>,
    pub average_per_day: f64,
    pub top_combinations: Vec<Combination>,
}

pub fn advanced(table: &AppointmentTable) -> AdvancedSummary {
    let distinct = table.distinct_dates();
    let average_per_day = if distinct == 0 {
        0.0
    } else {
        table.len() as f64 / distinct as f64
    };

    AdvancedSummary {
        top_center: table.mode(Column::Center).map(str::to_string),
        top_specialty: table.mode(Column::Specialty).map(str::to_string),
        top_weekday: table.mode(Column::Weekday).map(str::to_string),
        average_per_day,
        top_combinations: table
            .combinations()
            .into_iter()
            .take(TOP_COMBINATIONS)
            .map(|(specialty, center, count)| Combination {
                specialty: specialty.to_string(),
                center: center.to_string(),
                count,
            })
            .collect(),
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, heading: &str, tally: &Tally) -> fmt::Result {
    writeln!(f, "\n{heading}:")?;
    let sorted = tally.sorted_desc();
    let width = sorted.iter().map(|(c, _)| c.chars().count()).max().unwrap_or(0);
    for (category, count) in sorted {
        writeln!(f, "   {category:<width$}  {count}")?;
    }
    Ok(())
}

impl fmt::Display for GeneralSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "ANÁLISIS GENERAL DEL SISTEMA DE CITAS MÉDICAS")?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "\nTotal de citas agendadas: {}", self.total)?;
        if let Some((min, max)) = self.date_range {
            writeln!(f, "Rango de fechas: {min} - {max}")?;
        }

        write_counts(f, "Distribución por Centro de Salud", &self.by_center)?;
        write_counts(f, "Distribución por Especialidad", &self.by_specialty)?;
        write_counts(f, "Distribución por Estado", &self.by_status)?;
        write_counts(f, "Citas por Día de la Semana", &self.by_weekday)
    }
}

impl fmt::Display for AdvancedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

        writeln!(f, "\n{RULE}")?;
        writeln!(f, "ESTADÍSTICAS AVANZADAS")?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "\nCentro más solicitado: {}", or_dash(&self.top_center))?;
        writeln!(f, "Especialidad más solicitada: {}", or_dash(&self.top_specialty))?;
        writeln!(f, "Día con más citas: {}", or_dash(&self.top_weekday))?;
        writeln!(f, "\nPromedio de citas por día: {:.2}", self.average_per_day)?;

        writeln!(f, "\nTop {TOP_COMBINATIONS} Combinaciones (Especialidad + Centro):")?;
        for combo in &self.top_combinations {
            writeln!(
                f,
                "   • {} en {}: {} citas",
                combo.specialty, combo.center, combo.count
            )?;
        }
        Ok(())
    }
}
