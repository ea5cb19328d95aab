use crate::models::{Exam, ExamInput};

/// Append-only exam records with a monotonic id counter.
#[derive(Debug)]
pub struct ExamStore {
    records: Vec<Exam>,
    next_id: u64,
}

impl ExamStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    pub fn create(&mut self, input: ExamInput) -> Exam {
        let id = self.next_id;
        self.next_id += 1;

        let exam = input.into_exam(id);
        self.records.push(exam.clone());
        tracing::debug!(id, owner = %exam.owner_id, "Exam recorded");
        exam
    }

    pub fn list_by_owner(&self, owner_id: &str) -> Vec<Exam> {
        self.records
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect()
    }
}

impl Default for ExamStore {
    fn default() -> Self {
        Self::new()
    }
}
