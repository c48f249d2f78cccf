//! Prompt Composer: turns a validated lesson-plan request into the instruction
//! sent to the generation gateway.
//!
//! Pure and deterministic: no I/O, no clock, no randomness. The same input
//! always yields a byte-identical prompt.

use crate::rpp::models::ValidatedLessonPlan;
use crate::rpp::prompts::{
    CLOSING, COMPONENTS_TEMPLATE, DIRECTIVES_TEMPLATE, OPENING, STRUCTURE_EXAMPLE,
};
use crate::rpp::templates::TemplateDescriptor;
use crate::rpp::tier::{classify_grade, EducationTier};

/// The composed instruction together with the tier and template it was built from.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub tier: EducationTier,
    pub template: &'static TemplateDescriptor,
    pub prompt: String,
}

pub fn compose(plan: &ValidatedLessonPlan) -> ComposedPrompt {
    let tier = classify_grade(&plan.grade_level);
    let template = plan.template.descriptor();
    let prompt = compose_prompt(plan, tier, template);
    ComposedPrompt {
        tier,
        template,
        prompt,
    }
}

/// Builds the prompt: header, twelve components, template outline,
/// directives, structure example, closing. Sections are separated by a blank line.
pub fn compose_prompt(
    plan: &ValidatedLessonPlan,
    tier: EducationTier,
    template: &TemplateDescriptor,
) -> String {
    let sections = [
        build_header(plan, tier, template),
        fill_placeholders(
            COMPONENTS_TEMPLATE,
            &[
                ("template_name", template.name),
                ("school_name", plan.school_name.as_str()),
                ("teacher_name", plan.teacher_name.as_str()),
                ("topic", plan.topic.as_str()),
            ],
        ),
        format!(
            "**FORMAT RPP YANG DIHARAPKAN:**\n{}",
            template.format_outline()
        ),
        fill_placeholders(
            DIRECTIVES_TEMPLATE,
            &[
                ("tier", tier.label()),
                ("grade", plan.grade_level.as_str()),
                ("topic", plan.topic.as_str()),
                ("template_name", template.name),
                ("teacher_name", plan.teacher_name.as_str()),
                ("school_name", plan.school_name.as_str()),
            ],
        ),
        STRUCTURE_EXAMPLE.to_string(),
        CLOSING.to_string(),
    ];

    sections.join("\n\n")
}

fn build_header(
    plan: &ValidatedLessonPlan,
    tier: EducationTier,
    template: &TemplateDescriptor,
) -> String {
    let mut lines = vec![
        OPENING.to_string(),
        String::new(),
        "**INFORMASI DASAR:**".to_string(),
        format!("- Nama Guru: {}", plan.teacher_name),
        format!("- Nama Sekolah: {}", plan.school_name),
        format!("- Mata Pelajaran: {}", plan.subject),
        format!("- Kelas: {} ({})", plan.grade_level, tier.label()),
        format!("- Materi Ajar: {}", plan.topic),
    ];
    if let Some(allocation) = &plan.time_allocation {
        lines.push(format!("- Alokasi Waktu: {allocation}"));
    }
    lines.push(format!("- Template: {}", template.name));
    lines.join("\n")
}

/// Substitutes `{key}` placeholders in a single left-to-right pass, so braces
/// inside user-supplied values are never re-expanded. Unknown placeholders are
/// left as written.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpp::templates::TemplateId;

    fn budi_plan() -> ValidatedLessonPlan {
        ValidatedLessonPlan {
            teacher_name: "Budi, S.Pd.".to_string(),
            school_name: "SDN 1 Maju".to_string(),
            subject: "Matematika".to_string(),
            grade_level: "4".to_string(),
            topic: "Pecahan".to_string(),
            time_allocation: None,
            template: TemplateId::KurikulumMerdeka,
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let plan = budi_plan();
        let first = compose(&plan).prompt;
        let second = compose(&plan).prompt;
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_budi_scenario_contains_inputs_and_outline() {
        let composed = compose(&budi_plan());
        assert_eq!(composed.tier, EducationTier::Primary);
        assert_eq!(composed.template.name, "Kurikulum Merdeka");

        let prompt = &composed.prompt;
        assert!(prompt.contains("Budi, S.Pd."));
        assert!(prompt.contains("SDN 1 Maju"));
        assert!(prompt.contains("Pecahan"));
        assert!(prompt.contains("- Kelas: 4 (SD/MI)"));
        assert!(prompt.contains(&composed.template.format_outline()));
        assert!(prompt.contains("12. Refleksi Pembelajaran"));
    }

    #[test]
    fn test_time_allocation_line_only_when_supplied() {
        let mut plan = budi_plan();
        assert!(!compose(&plan).prompt.contains("Alokasi Waktu:"));

        plan.time_allocation = Some("2 x 35 menit".to_string());
        assert!(compose(&plan)
            .prompt
            .contains("- Alokasi Waktu: 2 x 35 menit\n"));
    }

    #[test]
    fn test_header_has_no_blank_line_without_allocation() {
        let prompt = compose(&budi_plan()).prompt;
        assert!(prompt.contains("- Materi Ajar: Pecahan\n- Template: Kurikulum Merdeka"));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let prompt = compose(&budi_plan()).prompt;
        let markers = [
            "**INFORMASI DASAR:**",
            "**INSTRUKSI KHUSUS:**",
            "**FORMAT RPP YANG DIHARAPKAN:**",
            "**PETUNJUK TAMBAHAN:**",
            "**CONTOH STRUKTUR YANG DIHARAPKAN",
            "Mohon buat RPP yang LENGKAP",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| prompt.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(prompt.ends_with("tanpa perlu edit tambahan."));
    }

    #[test]
    fn test_twelve_components_are_numbered() {
        let prompt = compose(&budi_plan()).prompt;
        let instructions_start = prompt.find("**INSTRUKSI KHUSUS:**").unwrap();
        let instructions_end = prompt.find("**FORMAT RPP YANG DIHARAPKAN:**").unwrap();
        let block = &prompt[instructions_start..instructions_end];
        for n in 1..=12 {
            assert!(block.contains(&format!("\n{n}. **")), "component {n} missing");
        }
        assert!(block.contains("Jelaskan materi \"Pecahan\" secara lengkap"));
    }

    #[test]
    fn test_directives_reference_tier_and_template() {
        let mut plan = budi_plan();
        plan.grade_level = "8".to_string();
        plan.template = TemplateId::Stem;
        let prompt = compose(&plan).prompt;
        assert!(prompt.contains("jenjang SMP/MTs kelas 8"));
        assert!(prompt.contains("Sesuaikan dengan format STEM/STEAM"));
        assert!(prompt.contains("1. Identitas RPP\n2. Tema STEM/STEAM"));
    }

    #[test]
    fn test_braces_in_user_values_are_not_expanded() {
        let mut plan = budi_plan();
        plan.topic = "{teacher_name} dan {x}".to_string();
        let prompt = compose(&plan).prompt;
        assert!(prompt.contains("Jelaskan materi \"{teacher_name} dan {x}\""));
    }

    #[test]
    fn test_fill_placeholders_leaves_unknown_keys() {
        assert_eq!(
            fill_placeholders("a {k} b {unknown} c {", &[("k", "v")]),
            "a v b {unknown} c {"
        );
    }
}
