//! Education tier classification: maps a grade (`kelas`) to a school level label.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationTier {
    /// Grades 1–6.
    Primary,
    /// Grades 7–9.
    LowerSecondary,
    /// Grades 10–12.
    UpperSecondary,
    /// Unparsable or out-of-range grade.
    General,
}

impl EducationTier {
    pub fn label(&self) -> &'static str {
        match self {
            EducationTier::Primary => "SD/MI",
            EducationTier::LowerSecondary => "SMP/MTs",
            EducationTier::UpperSecondary => "SMA/MA/SMK",
            EducationTier::General => "Umum",
        }
    }
}

/// Classifies a grade string. Never fails: anything that does not read as
/// 1–12 is `General`.
pub fn classify_grade(grade: &str) -> EducationTier {
    match leading_integer(grade) {
        Some(1..=6) => EducationTier::Primary,
        Some(7..=9) => EducationTier::LowerSecondary,
        Some(10..=12) => EducationTier::UpperSecondary,
        _ => EducationTier::General,
    }
}

/// Reads an optional sign and the leading run of ASCII digits after any
/// leading whitespace. Trailing text is ignored ("10.5" → 10).
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    // Overlong digit runs overflow; treat them as out of range.
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grades_one_to_six_are_primary() {
        for grade in 1..=6 {
            assert_eq!(classify_grade(&grade.to_string()), EducationTier::Primary);
        }
        assert_eq!(EducationTier::Primary.label(), "SD/MI");
    }

    #[test]
    fn test_grades_seven_to_nine_are_lower_secondary() {
        for grade in 7..=9 {
            assert_eq!(
                classify_grade(&grade.to_string()),
                EducationTier::LowerSecondary
            );
        }
        assert_eq!(EducationTier::LowerSecondary.label(), "SMP/MTs");
    }

    #[test]
    fn test_grades_ten_to_twelve_are_upper_secondary() {
        for grade in 10..=12 {
            assert_eq!(
                classify_grade(&grade.to_string()),
                EducationTier::UpperSecondary
            );
        }
        assert_eq!(EducationTier::UpperSecondary.label(), "SMA/MA/SMK");
    }

    #[test]
    fn test_out_of_range_and_garbage_fall_back() {
        for grade in ["0", "13", "-3", "", "   ", "abc", "kelas 4", "99999999999999999999999"] {
            assert_eq!(
                classify_grade(grade),
                EducationTier::General,
                "grade {grade:?} should be General"
            );
        }
        assert_eq!(EducationTier::General.label(), "Umum");
    }

    #[test]
    fn test_lenient_leading_integer() {
        assert_eq!(classify_grade(" 7"), EducationTier::LowerSecondary);
        assert_eq!(classify_grade("10.5"), EducationTier::UpperSecondary);
        assert_eq!(classify_grade("4 SD"), EducationTier::Primary);
        assert_eq!(classify_grade("+2"), EducationTier::Primary);
    }
}
