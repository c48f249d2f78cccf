//! Lesson-plan input record and its validation.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::rpp::templates::TemplateId;

/// Message prefix shown when required fields are missing.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Data nama guru, nama sekolah, mata pelajaran, kelas, dan materi ajar wajib diisi";

/// Raw form submission. Missing string fields deserialize as empty so that
/// validation, not the JSON extractor, decides what is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonPlanRequest {
    #[serde(rename = "namaGuru")]
    pub teacher_name: String,
    #[serde(rename = "namaSekolah")]
    pub school_name: String,
    #[serde(rename = "mataPelajaran")]
    pub subject: String,
    #[serde(rename = "kelas", deserialize_with = "string_or_number")]
    pub grade_level: String,
    #[serde(rename = "materiAjar")]
    pub topic: String,
    #[serde(rename = "alokasiWaktu")]
    pub time_allocation: Option<String>,
    #[serde(rename = "templateRPP")]
    pub template_id: Option<String>,
}

/// A request that passed validation. Values are kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLessonPlan {
    pub teacher_name: String,
    pub school_name: String,
    pub subject: String,
    pub grade_level: String,
    pub topic: String,
    /// `None` when the allocation was absent or blank.
    pub time_allocation: Option<String>,
    pub template: TemplateId,
}

impl LessonPlanRequest {
    /// Wire names of required fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("namaGuru", &self.teacher_name),
            ("namaSekolah", &self.school_name),
            ("mataPelajaran", &self.subject),
            ("kelas", &self.grade_level),
            ("materiAjar", &self.topic),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn validate(&self) -> Result<ValidatedLessonPlan, AppError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "{REQUIRED_FIELDS_MESSAGE} (belum diisi: {})",
                missing.join(", ")
            )));
        }

        Ok(ValidatedLessonPlan {
            teacher_name: self.teacher_name.clone(),
            school_name: self.school_name.clone(),
            subject: self.subject.clone(),
            grade_level: self.grade_level.clone(),
            topic: self.topic.clone(),
            time_allocation: self
                .time_allocation
                .as_ref()
                .filter(|t| !t.trim().is_empty())
                .cloned(),
            template: TemplateId::from_key(self.template_id.as_deref().unwrap_or_default()),
        })
    }
}

/// Grade selectors send `kelas` as a number as often as a string.
/// Numbers keep their JSON spelling; `null` reads as empty.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(de::Error::invalid_type(
            de::Unexpected::Other(json_kind(&other)),
            &"a string or a number",
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        _ => "value",
    }
}
