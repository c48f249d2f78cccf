// RPP export: plain-text download and paginated document layout.
// Header lines and filenames come only from fields the lesson-plan form collects.

pub mod handlers;
pub mod metrics;
pub mod paginate;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// The RPP text verbatim as a `.txt` download.
    Txt,
    /// Positioned lines on A4 pages, for a client-side PDF drawer.
    Layout,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Layout => "pdf",
        }
    }
}

/// Lesson-plan fields that label an exported document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMetadata {
    #[serde(rename = "mataPelajaran")]
    pub subject: String,
    #[serde(
        rename = "kelas",
        deserialize_with = "crate::rpp::models::string_or_number"
    )]
    pub grade_level: String,
    #[serde(rename = "materiAjar")]
    pub topic: String,
    #[serde(rename = "alokasiWaktu")]
    pub time_allocation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    #[serde(default)]
    pub rpp: String,
    #[serde(flatten)]
    pub metadata: ExportMetadata,
}

impl ExportMetadata {
    /// `RPP_<mapel>_<kelas>_<materi>.<ext>`; blank parts are skipped.
    pub fn filename(&self, format: ExportFormat) -> String {
        let mut parts = vec!["RPP".to_string()];
        parts.extend(
            [&self.subject, &self.grade_level, &self.topic]
                .into_iter()
                .map(|p| sanitize_filename_part(p))
                .filter(|p| !p.is_empty()),
        );
        format!("{}.{}", parts.join("_"), format.extension())
    }

    /// Header lines printed under the document title.
    pub fn info_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Mata Pelajaran: {}", self.subject),
            format!("Kelas: {}", self.grade_level),
            format!("Materi Ajar: {}", self.topic),
        ];
        if let Some(allocation) = self
            .time_allocation
            .as_deref()
            .filter(|t| !t.trim().is_empty())
        {
            lines.push(format!("Alokasi Waktu: {allocation}"));
        }
        lines
    }
}

/// Keeps ASCII letters, digits, `-` and `.`; runs of whitespace or `_` become one `_`.
/// Everything else is dropped so the name is safe inside a `Content-Disposition` header.
fn sanitize_filename_part(part: &str) -> String {
    let mut out = String::new();
    for c in part.trim().chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
            out.push(c);
        } else if (c.is_whitespace() || c == '_') && !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_end_matches('_').trim_matches('.').to_string()
}
