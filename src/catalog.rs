//! Static reference lists offered to booking clients.
//!
//! Appointments are expected to name one of these, but nothing enforces it.

pub const HEALTH_CENTERS: &[&str] = &[
    "Hospital Central",
    "Clínica del Norte",
    "Centro Médico Sur",
    "Hospital Universitario",
    "Clínica Santa María",
];

pub const SPECIALTIES: &[&str] = &[
    "Medicina General",
    "Pediatría",
    "Cardiología",
    "Dermatología",
    "Ginecología",
    "Traumatología",
    "Oftalmología",
    "Psicología",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_have_no_duplicates() {
        for list in [HEALTH_CENTERS, SPECIALTIES] {
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }
}
