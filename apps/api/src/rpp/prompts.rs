// All LLM prompt constants for RPP generation.
// Placeholders are filled by `composer::compose_prompt`.

/// System role for every RPP generation call.
pub const RPP_SYSTEM: &str = "Anda adalah ahli pendidikan dan kurikulum di Indonesia yang \
    sangat berpengalaman dalam membuat Rencana Pelaksanaan Pembelajaran (RPP) yang sesuai \
    dengan Kurikulum Merdeka. Buatlah RPP yang lengkap, terstruktur, dan profesional dengan \
    format yang jelas.";

/// Sampling temperature for RPP generation.
pub const RPP_TEMPERATURE: f64 = 0.7;

/// Output ceiling for one generated RPP.
pub const RPP_MAX_OUTPUT_TOKENS: u32 = 3000;

pub const OPENING: &str = "Buatlah Rencana Pelaksanaan Pembelajaran (RPP) yang lengkap dan \
profesional secara otomatis dengan informasi dasar sebagai berikut:";

/// Twelve components the document must contain.
/// Replace: {template_name}, {school_name}, {teacher_name}, {topic}
pub const COMPONENTS_TEMPLATE: &str = r#"**INSTRUKSI KHUSUS:**
Buatlah RPP LENGKAP secara otomatis dengan struktur {template_name} tanpa perlu input tambahan dari guru. Generate semua komponen RPP secara otomatis:

1. **Identitas Sekolah dan RPP** - Gunakan nama sekolah "{school_name}" dan nama guru "{teacher_name}"
2. **Kompetensi Awal** - Buat kompetensi awal yang sesuai dengan materi dan kelas
3. **Profil Pelajar Pancasila** - Pilih profil yang relevan dengan materi
4. **Fase dan Elemen** - Tentukan fase dan elemen yang sesuai
5. **Capaian Pembelajaran** - Buat capaian pembelajaran yang spesifik dan terukur
6. **Alur Tujuan Pembelajaran (ATP)** - Rinci langkah-langkah pembelajaran
7. **Model Pembelajaran** - Pilih model yang sesuai dengan materi
8. **Materi Pembelajaran** - Jelaskan materi "{topic}" secara lengkap
9. **Media dan Alat Pembelajaran** - Pilih media yang relevan dan modern
10. **Langkah-langkah Kegiatan Pembelajaran** - Buat kegiatan dari awal hingga akhir dengan alokasi waktu yang jelas
11. **Penilaian Pembelajaran** - Rinci penilaian sikap, pengetahuan, dan keterampilan
12. **Refleksi Pembelajaran** - Buat refleksi untuk guru"#;

/// Formatting and style directives.
/// Replace: {tier}, {grade}, {topic}, {template_name}, {teacher_name}, {school_name}
pub const DIRECTIVES_TEMPLATE: &str = r#"**PETUNJUK TAMBAHAN:**
- Gunakan bahasa yang jelas, profesional, dan mudah dipahami
- Pastikan konten sesuai dengan jenjang {tier} kelas {grade}
- Fokus pada materi ajar "{topic}" sebagai topik utama
- Generate semua konten secara otomatis tanpa memerlukan input tambahan
- Format dengan heading yang jelas menggunakan tanda ** untuk judul bagian
- Gunakan numbering dan bullet points untuk daftar
- Pastikan RPP praktis, lengkap, dan siap diimplementasikan oleh guru
- Sesuaikan dengan format {template_name}
- Untuk Kurikulum Merdeka, fokus pada mata pelajaran bukan tema
- Gunakan identitas guru "{teacher_name}" dan sekolah "{school_name}" secara konsisten"#;

pub const STRUCTURE_EXAMPLE: &str = r#"**CONTOH STRUKTUR YANG DIHARAPKAN (sesuai file referensi):**
- Gunakan format seperti MODUL AJAR DEEP LEARNING STRATEGI CONTEXTUAL TEACHING AND LEARNING (CTL)
- Sertakan IDENTIFIKASI PESERTA DIDIK, MATERI PELAJARAN, DIMENSI PROFIL LULUSAN
- Buat DESAIN PEMBELAJARAN dengan CAPAIAN PEMBELAJARAN, LINTAS DISIPLIN, TUJUAN PEMBELAJARAN
- Rinci PENGALAMAN BELAJAR dengan Awal, Inti, dan Penutup
- Sertakan ASESMEN PEMBELAJARAN yang lengkap"#;

pub const CLOSING: &str = "Mohon buat RPP yang LENGKAP, TERSTRUKTUR, dan SIAP DIGUNAKAN untuk \
pembelajaran di kelas tanpa perlu edit tambahan.";
