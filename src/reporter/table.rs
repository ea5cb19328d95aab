//! Tabular view of fetched appointments with calendar-derived columns.

use chrono::{Datelike, NaiveDate};

use crate::models::Appointment;
use crate::stats::{self, Tally};

use super::ReportError;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const WEEKDAY_LABELS_ES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One appointment plus the columns derived from its date.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRow {
    pub appointment: Appointment,
    pub date: NaiveDate,
}

impl AppointmentRow {
    /// Monday = 0.
    pub fn weekday_index(&self) -> usize {
        self.date.weekday().num_days_from_monday() as usize
    }

    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday_index()]
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.date.month0() as usize]
    }

    pub fn iso_week(&self) -> u32 {
        self.date.iso_week().week()
    }

    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::Center => self.appointment.center.as_str(),
            Column::Specialty => self.appointment.specialty.as_str(),
            Column::Status => self.appointment.status.as_str(),
            Column::Weekday => self.weekday_name(),
            Column::Month => self.month_name(),
        }
    }
}

/// Categorical columns that can be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Center,
    Specialty,
    Status,
    Weekday,
    Month,
}

#[derive(Debug, Clone)]
pub struct AppointmentTable {
    rows: Vec<AppointmentRow>,
    skipped: usize,
}

impl AppointmentTable {
    /// Build the table. Appointments whose `fecha` is not `YYYY-MM-DD`
    /// are dropped with a warning; a table with no rows is an error.
    pub fn from_records(records: Vec<Appointment>) -> Result<Self, ReportError> {
        let mut rows = Vec::with_capacity(records.len());
        let mut skipped = 0;

        for appointment in records {
            match NaiveDate::parse_from_str(&appointment.date, "%Y-%m-%d") {
                Ok(date) => rows.push(AppointmentRow { appointment, date }),
                Err(e) => {
                    tracing::warn!(
                        id = appointment.id,
                        fecha = %appointment.date,
                        "Skipping appointment with unparseable date: {e}"
                    );
                    skipped += 1;
                }
            }
        }

        if rows.is_empty() {
            return Err(ReportError::EmptyDataset);
        }

        Ok(Self { rows, skipped })
    }

    pub fn rows(&self) -> &[AppointmentRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records dropped for an unparseable date.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.rows.iter().map(|r| r.date).min()?;
        let max = self.rows.iter().map(|r| r.date).max()?;
        Some((min, max))
    }

    /// Counts per value of `column`, first-seen order.
    pub fn tally(&self, column: Column) -> Tally {
        self.rows.iter().map(|r| r.value(column)).collect()
    }

    /// Most frequent value of `column`.
    pub fn mode(&self, column: Column) -> Option<&str> {
        stats::mode_of(self.rows.iter().map(move |r| r.value(column)))
    }

    /// Appointment counts per calendar date, ascending by date.
    pub fn per_date(&self) -> Vec<(NaiveDate, usize)> {
        let mut counts: Vec<(NaiveDate, usize)> = Vec::new();
        for row in &self.rows {
            match counts.iter_mut().find(|(d, _)| *d == row.date) {
                Some((_, n)) => *n += 1,
                None => counts.push((row.date, 1)),
            }
        }
        counts.sort_by_key(|(d, _)| *d);
        counts
    }

    pub fn distinct_dates(&self) -> usize {
        self.per_date().len()
    }

    /// Counts per weekday, Monday first, zero-filled.
    pub fn weekday_counts(&self) -> [usize; 7] {
        let mut counts = [0; 7];
        for row in &self.rows {
            counts[row.weekday_index()] += 1;
        }
        counts
    }

    /// (specialty, center) pairs by descending count; ties keep first-seen order.
    pub fn combinations(&self) -> Vec<(&str, &str, usize)> {
        let mut counts: Vec<(&str, &str, usize)> = Vec::new();
        for row in &self.rows {
            let specialty = row.appointment.specialty.as_str();
            let center = row.appointment.center.as_str();
            match counts
                .iter_mut()
                .find(|(s, c, _)| *s == specialty && *c == center)
            {
                Some((_, _, n)) => *n += 1,
                None => counts.push((specialty, center, 1)),
            }
        }
        counts.sort_by(|a, b| b.2.cmp(&a.2));
        counts
    }

    /// Specialty × center counts. Labels are sorted; `matrix[s][c]`.
    pub fn crosstab(&self) -> CrossTab<'_> {
        let mut specialties: Vec<&str> = self
            .rows
            .iter()
            .map(|r| r.appointment.specialty.as_str())
            .collect();
        specialties.sort_unstable();
        specialties.dedup();

        let mut centers: Vec<&str> = self
            .rows
            .iter()
            .map(|r| r.appointment.center.as_str())
            .collect();
        centers.sort_unstable();
        centers.dedup();

        let mut matrix = vec![vec![0usize; centers.len()]; specialties.len()];
        for row in &self.rows {
            let s = specialties
                .binary_search(&row.appointment.specialty.as_str())
                .unwrap_or_default();
            let c = centers
                .binary_search(&row.appointment.center.as_str())
                .unwrap_or_default();
            matrix[s][c] += 1;
        }

        CrossTab {
            specialties,
            centers,
            matrix,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossTab<'a> {
    pub specialties: Vec<&'a str>,
    pub centers: Vec<&'a str>,
    pub matrix: Vec<Vec<usize>>,
}

impl CrossTab<'_> {
    pub fn max(&self) -> usize {
        self.matrix.iter().flatten().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::AppointmentStatus;

    pub(crate) fn appt(id: u64, specialty: &str, center: &str, date: &str) -> Appointment {
        Appointment {
            id,
            patient_name: format!("Paciente {id}"),
            owner_id: None,
            phone: "300".into(),
            center: center.into(),
            specialty: specialty.into(),
            date: date.into(),
            time: "08:30".into(),
            reason: "Control".into(),
            status: AppointmentStatus::Pending,
        }
    }

    pub(crate) fn sample() -> AppointmentTable {
        AppointmentTable::from_records(vec![
            // 2025-03-03 is a Monday.
            appt(1, "Pediatría", "Hospital Central", "2025-03-03"),
            appt(2, "Cardiología", "Clínica del Norte", "2025-03-03"),
            appt(3, "Pediatría", "Hospital Central", "2025-03-05"),
            appt(4, "Pediatría", "Clínica del Norte", "2025-03-09"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_input_is_empty_dataset() {
        assert!(matches!(
            AppointmentTable::from_records(Vec::new()),
            Err(ReportError::EmptyDataset)
        ));
    }

    #[test]
    fn unparseable_dates_are_skipped() {
        let table = AppointmentTable::from_records(vec![
            appt(1, "Pediatría", "Hospital Central", "mañana"),
            appt(2, "Pediatría", "Hospital Central", "2025-03-03"),
        ])
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.skipped(), 1);

        let all_bad = AppointmentTable::from_records(vec![appt(1, "x", "y", "03/03/2025")]);
        assert!(matches!(all_bad, Err(ReportError::EmptyDataset)));
    }

    #[test]
    fn derived_columns() {
        let table = sample();
        let first = &table.rows()[0];
        assert_eq!(first.weekday_name(), "Monday");
        assert_eq!(first.month_name(), "March");
        assert_eq!(first.iso_week(), 10);
        assert_eq!(table.rows()[3].weekday_name(), "Sunday");
    }

    #[test]
    fn date_range_and_per_date() {
        let table = sample();
        let (min, max) = table.date_range().unwrap();
        assert_eq!(min.to_string(), "2025-03-03");
        assert_eq!(max.to_string(), "2025-03-09");
        assert_eq!(table.distinct_dates(), 3);
        assert_eq!(table.per_date()[0].1, 2);
    }

    #[test]
    fn weekday_counts_are_monday_first() {
        assert_eq!(sample().weekday_counts(), [2, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn combinations_sorted_by_count() {
        let table = sample();
        let combos = table.combinations();
        assert_eq!(combos[0], ("Pediatría", "Hospital Central", 2));
        assert_eq!(combos[1], ("Cardiología", "Clínica del Norte", 1));
        assert_eq!(combos[2], ("Pediatría", "Clínica del Norte", 1));
    }

    #[test]
    fn crosstab_counts_pairs() {
        let table = sample();
        let tab = table.crosstab();
        assert_eq!(tab.specialties, vec!["Cardiología", "Pediatría"]);
        assert_eq!(tab.centers, vec!["Clínica del Norte", "Hospital Central"]);
        assert_eq!(tab.matrix, vec![vec![1, 0], vec![1, 2]]);
        assert_eq!(tab.max(), 2);
    }

    #[test]
    fn mode_uses_column_values() {
        let table = sample();
        assert_eq!(table.mode(Column::Specialty), Some("Pediatría"));
        assert_eq!(table.mode(Column::Weekday), Some("Monday"));
        assert_eq!(table.tally(Column::Center).get("Clínica del Norte"), 2);
    }
}
