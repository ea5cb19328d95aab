use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: u64,
    #[serde(rename = "cedula_paciente")]
    pub owner_id: String,
    #[serde(rename = "tipo_examen")]
    pub exam_type: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "resultado")]
    pub result: String,
    #[serde(rename = "archivo_url")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "cedula_paciente")]
    pub owner_id: String,
    #[serde(rename = "tipo_examen")]
    pub exam_type: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "resultado")]
    pub result: String,
    #[serde(rename = "archivo_url", default)]
    pub file_url: Option<String>,
}

impl ExamInput {
    pub fn into_exam(self, id: u64) -> Exam {
        Exam {
            id,
            owner_id: self.owner_id,
            exam_type: self.exam_type,
            date: self.date,
            result: self.result,
            file_url: self.file_url,
        }
    }
}
