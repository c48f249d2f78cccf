//! Template catalog: the six curriculum outlines an RPP can follow.
//!
//! Static and immutable. Unknown keys resolve to `TemplateId::default()`
//! (Kurikulum Merdeka) instead of failing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    KurikulumMerdeka,
    #[serde(rename = "kurikulum_2013")]
    Kurikulum2013,
    #[serde(rename = "k13_revisi")]
    K13Revisi,
    Simple,
    Stem,
    ProjectBased,
}

/// Display name plus the ordered outline the generated document must follow.
#[derive(Debug, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    /// Sentence introducing the outline in the prompt.
    pub intro: &'static str,
    pub outline_sections: &'static [&'static str],
}

impl TemplateDescriptor {
    /// Intro sentence followed by the numbered outline, one section per line.
    pub fn format_outline(&self) -> String {
        let mut out = String::from(self.intro);
        for (i, section) in self.outline_sections.iter().enumerate() {
            out.push('\n');
            out.push_str(&format!("{}. {}", i + 1, section));
        }
        out
    }
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::KurikulumMerdeka,
        TemplateId::Kurikulum2013,
        TemplateId::K13Revisi,
        TemplateId::Simple,
        TemplateId::Stem,
        TemplateId::ProjectBased,
    ];

    /// Resolves a wire key (`templateRPP`). Unrecognized keys yield the default.
    pub fn from_key(key: &str) -> TemplateId {
        Self::ALL
            .into_iter()
            .find(|t| t.descriptor().key == key)
            .unwrap_or_default()
    }

    pub fn descriptor(&self) -> &'static TemplateDescriptor {
        match self {
            TemplateId::KurikulumMerdeka => &KURIKULUM_MERDEKA,
            TemplateId::Kurikulum2013 => &KURIKULUM_2013,
            TemplateId::K13Revisi => &K13_REVISI,
            TemplateId::Simple => &SIMPLE,
            TemplateId::Stem => &STEM,
            TemplateId::ProjectBased => &PROJECT_BASED,
        }
    }
}

static KURIKULUM_MERDEKA: TemplateDescriptor = TemplateDescriptor {
    key: "kurikulum_merdeka",
    name: "Kurikulum Merdeka",
    intro: "Buatlah RPP dengan struktur lengkap sesuai Kurikulum Merdeka yang mencakup:",
    outline_sections: &[
        "Identitas Sekolah dan RPP",
        "Kompetensi Awal",
        "Profil Pelajar Pancasila yang Dikembangkan",
        "Fase dan Elemen",
        "Capaian Pembelajaran",
        "Alur Tujuan Pembelajaran (ATP)",
        "Model Pembelajaran",
        "Materi Pembelajaran",
        "Media dan Alat Pembelajaran",
        "Langkah-langkah Kegiatan Pembelajaran (Pendahuluan, Inti, Penutup)",
        "Penilaian Pembelajaran (Aspek, Instrumen, Kriteria)",
        "Refleksi Pembelajaran",
    ],
};

static KURIKULUM_2013: TemplateDescriptor = TemplateDescriptor {
    key: "kurikulum_2013",
    name: "Kurikulum 2013",
    intro: "Buatlah RPP dengan struktur lengkap sesuai Kurikulum 2013 yang mencakup:",
    outline_sections: &[
        "Identitas Sekolah",
        "Kompetensi Inti (KI) dan Kompetensi Dasar (KD)",
        "Indikator Pencapaian Kompetensi",
        "Tujuan Pembelajaran",
        "Materi Pembelajaran",
        "Metode Pembelajaran",
        "Media dan Sumber Belajar",
        "Langkah-langkah Kegiatan Pembelajaran (Kegiatan Pendahuluan, Inti, Penutup)",
        "Penilaian Hasil Belajar (Teknik, Instrumen, Kriteria)",
        "Refleksi",
    ],
};

static K13_REVISI: TemplateDescriptor = TemplateDescriptor {
    key: "k13_revisi",
    name: "K13 Revisi",
    intro: "Buatlah RPP dengan struktur lengkap sesuai K13 Revisi yang mencakup:",
    outline_sections: &[
        "Identitas Sekolah dan RPP",
        "Kompetensi Inti (KI) dan Kompetensi Dasar (KD)",
        "Indikator",
        "Tujuan Pembelajaran",
        "Materi Ajar",
        "Metode Pembelajaran",
        "Media, Alat, dan Sumber Belajar",
        "Langkah-langkah Kegiatan Pembelajaran",
        "Penilaian Pembelajaran (Sikap, Pengetahuan, Keterampilan)",
        "Program Tindak Lanjut",
    ],
};

static SIMPLE: TemplateDescriptor = TemplateDescriptor {
    key: "simple",
    name: "Template Sederhana",
    intro: "Buatlah RPP dengan format sederhana yang mencakup:",
    outline_sections: &[
        "Informasi Umum (Mata Pelajaran, Kelas, Tema, Waktu)",
        "Tujuan Pembelajaran",
        "Materi Pembelajaran",
        "Kegiatan Pembelajaran (Awal, Inti, Akhir)",
        "Media dan Alat",
        "Penilaian",
        "Refleksi",
    ],
};

static STEM: TemplateDescriptor = TemplateDescriptor {
    key: "stem",
    name: "STEM/STEAM",
    intro: "Buatlah RPP dengan pendekatan STEM/STEAM yang mencakup:",
    outline_sections: &[
        "Identitas RPP",
        "Tema STEM/STEAM",
        "Tujuan Pembelajaran (Sains, Teknologi, Engineering, Art, Matematika)",
        "Pertanyaan Esensial",
        "Materi Pembelajaran Terintegrasi",
        "Kegiatan Pembelajaran (Engineering Design Process)",
        "Media dan Sumber Belajar",
        "Penilaian (Proyek, Presentasi, Portofolio)",
        "Refleksi dan Evaluasi",
    ],
};

static PROJECT_BASED: TemplateDescriptor = TemplateDescriptor {
    key: "project_based",
    name: "Project Based Learning",
    intro: "Buatlah RPP dengan pendekatan Project Based Learning yang mencakup:",
    outline_sections: &[
        "Identitas RPP",
        "Judul Proyek",
        "Tujuan Pembelajaran",
        "Pertanyaan Pendorong (Driving Question)",
        "Tahapan Proyek (Planning, Development, Presentation)",
        "Kegiatan Pembelajaran",
        "Media dan Sumber Belajar",
        "Penilaian (Proses, Hasil, Presentasi)",
        "Refleksi dan Evaluasi",
    ],
};
