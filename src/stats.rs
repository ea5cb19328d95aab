//! Count-by-category breakdowns over appointment subsets.
//!
//! Categories keep the order in which they were first seen, so the JSON
//! objects served by `/estadisticas` are deterministic.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::Appointment;

/// Category → count, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    entries: Vec<(String, usize)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, category: &str) {
        match self.entries.iter_mut().find(|(c, _)| c == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category.to_string(), 1)),
        }
    }

    pub fn get(&self, category: &str) -> usize {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries by descending count; equal counts stay in first-seen order.
    pub fn sorted_desc(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<(&str, usize)> = self.iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }
}

impl<'a> FromIterator<&'a str> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for category in iter {
            tally.increment(category);
        }
        tally
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, count) in &self.entries {
            map.serialize_entry(category, count)?;
        }
        map.end()
    }
}

/// Appointment attributes that can be tallied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentField {
    Specialty,
    Center,
    Status,
    Owner,
    Date,
    Time,
}

impl AppointmentField {
    /// Value of this field on `appt`. Appointments without an owner have no value.
    pub fn value<'a>(&self, appt: &'a Appointment) -> Option<&'a str> {
        match self {
            Self::Specialty => Some(appt.specialty.as_str()),
            Self::Center => Some(appt.center.as_str()),
            Self::Status => Some(appt.status.as_str()),
            Self::Owner => appt.owner_id.as_deref(),
            Self::Date => Some(appt.date.as_str()),
            Self::Time => Some(appt.time.as_str()),
        }
    }
}

/// The three breakdowns served by `/estadisticas`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    #[serde(rename = "total_citas")]
    pub total: usize,
    #[serde(rename = "por_especialidad")]
    pub by_specialty: Tally,
    #[serde(rename = "por_centro")]
    pub by_center: Tally,
    #[serde(rename = "por_estado")]
    pub by_status: Tally,
}

/// Tally specialty, center and status over an already-filtered subset.
pub fn aggregate(appointments: &[Appointment]) -> Statistics {
    let mut stats = Statistics {
        total: appointments.len(),
        ..Statistics::default()
    };

    for appt in appointments {
        stats.by_specialty.increment(&appt.specialty);
        stats.by_center.increment(&appt.center);
        stats.by_status.increment(appt.status.as_str());
    }

    stats
}

/// Most frequent value of `field` across `appointments`.
pub fn mode<'a>(field: AppointmentField, appointments: &'a [Appointment]) -> Option<&'a str> {
    mode_of(appointments.iter().filter_map(move |a| field.value(a)))
}

/// Most frequent value in `values`.
///
/// On a tie the winner is the value whose running count reaches the
/// maximum first: for `[a, b, b, a]` that is `b`.
pub fn mode_of<'a, I>(values: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let values = values.into_iter();
    let max = values.clone().collect::<Tally>().iter().map(|(_, n)| n).max()?;

    let mut running = Tally::new();
    for value in values {
        running.increment(value);
        if running.get(value) == max {
            return Some(value);
        }
    }
    None
}
