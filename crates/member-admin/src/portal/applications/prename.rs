//! Bidirectional honorific mapping between the Thai and English prename
//! dropdowns of a person entry.
//!
//! The two sides are a single logical value: picking a mapped honorific on
//! one side mirrors its counterpart to the other, unless the other side holds
//! a custom "Other" free-text entry, which is never silently clobbered.
//! Policy for the historically inconsistent cases: selecting Other clears the
//! opposite-language free-text override, and switching away from Other clears
//! only the same-language override.

use super::view::PersonView;

pub const PRENAME_OTHER_TH: &str = "อื่นๆ";
pub const PRENAME_OTHER_EN: &str = "Other";

const PRENAME_PAIRS: &[(&str, &str)] = &[
    ("นาย", "Mr."),
    ("นาง", "Mrs."),
    ("นางสาว", "Ms."),
    (PRENAME_OTHER_TH, PRENAME_OTHER_EN),
];

/// Which prename dropdown the admin changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrenameSide {
    Thai,
    English,
}

pub fn is_other_th(value: &str) -> bool {
    value.trim() == PRENAME_OTHER_TH
}

pub fn is_other_en(value: &str) -> bool {
    normalize_en(value) == "other"
}

fn is_mapped_th(value: &str) -> bool {
    PRENAME_PAIRS.iter().any(|(th, _)| *th == value.trim())
}

fn is_mapped_en(value: &str) -> bool {
    english_counterpart_key(value).is_some()
}

/// English counterpart of a Thai honorific, if the value is mapped.
pub fn english_for_thai(value: &str) -> Option<&'static str> {
    PRENAME_PAIRS
        .iter()
        .find(|(th, _)| *th == value.trim())
        .map(|(_, en)| *en)
}

/// Thai counterpart of an English honorific. The English side is matched
/// case-insensitively and the trailing period is optional, because both
/// spellings occur in stored rows.
pub fn thai_for_english(value: &str) -> Option<&'static str> {
    let key = english_counterpart_key(value)?;
    PRENAME_PAIRS
        .iter()
        .find(|(_, en)| normalize_en(en) == key)
        .map(|(th, _)| *th)
}

fn english_counterpart_key(value: &str) -> Option<String> {
    let normalized = normalize_en(value);
    PRENAME_PAIRS
        .iter()
        .any(|(_, en)| normalize_en(en) == normalized)
        .then_some(normalized)
}

fn normalize_en(value: &str) -> String {
    value.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// Apply one prename dropdown change to a person entry, returning the next
/// state of the pair. Pure; the caller decides what to do with the result.
pub fn map_prename(person: &PersonView, side: PrenameSide, value: &str) -> PersonView {
    let mut next = person.clone();
    match side {
        PrenameSide::Thai => {
            let opposite_custom = is_other_en(&next.prename_en) && !next.prename_other_en.is_empty();
            next.prename_th = value.to_string();
            if is_other_th(value) {
                // Opposite-language override is cleared on selecting Other;
                // the same-language override is what the admin is about to type.
                next.prename_other_en.clear();
                if next.prename_en.is_empty() || is_mapped_en(&next.prename_en) {
                    next.prename_en = PRENAME_OTHER_EN.to_string();
                }
            } else if let Some(english) = english_for_thai(value) {
                next.prename_other_th.clear();
                if next.prename_en.is_empty() || (is_mapped_en(&next.prename_en) && !opposite_custom) {
                    next.prename_en = english.to_string();
                    next.prename_other_en.clear();
                }
            }
        }
        PrenameSide::English => {
            let opposite_custom = is_other_th(&next.prename_th) && !next.prename_other_th.is_empty();
            next.prename_en = value.to_string();
            if is_other_en(value) {
                next.prename_other_th.clear();
                if next.prename_th.is_empty() || is_mapped_th(&next.prename_th) {
                    next.prename_th = PRENAME_OTHER_TH.to_string();
                }
            } else if let Some(thai) = thai_for_english(value) {
                next.prename_other_en.clear();
                if next.prename_th.is_empty() || (is_mapped_th(&next.prename_th) && !opposite_custom) {
                    next.prename_th = thai.to_string();
                    next.prename_other_th.clear();
                }
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> PersonView {
        PersonView::default()
    }

    #[test]
    fn mapping_table_is_exhaustive_both_directions() {
        let expected = [("นาย", "Mr."), ("นาง", "Mrs."), ("นางสาว", "Ms."), ("อื่นๆ", "Other")];
        for (th, en) in expected {
            assert_eq!(english_for_thai(th), Some(en));
            assert_eq!(thai_for_english(en), Some(th));
        }
    }

    #[test]
    fn english_matching_tolerates_case_and_period() {
        assert_eq!(thai_for_english("Mr"), Some("นาย"));
        assert_eq!(thai_for_english("mr."), Some("นาย"));
        assert_eq!(thai_for_english("MS"), Some("นางสาว"));
        assert_eq!(thai_for_english("Dr."), None);
    }

    #[test]
    fn setting_thai_mirrors_to_empty_english() {
        let next = map_prename(&blank(), PrenameSide::Thai, "นาง");
        assert_eq!(next.prename_th, "นาง");
        assert_eq!(next.prename_en, "Mrs.");
    }

    #[test]
    fn mapped_english_value_is_overwritten() {
        let mut person = blank();
        person.prename_en = "Mrs.".to_string();
        let next = map_prename(&person, PrenameSide::Thai, "นาย");
        assert_eq!(next.prename_en, "Mr.");
    }

    #[test]
    fn custom_other_entry_is_never_clobbered() {
        let mut person = blank();
        person.prename_en = "Other".to_string();
        person.prename_other_en = "Professor".to_string();
        let next = map_prename(&person, PrenameSide::Thai, "นาย");
        assert_eq!(next.prename_en, "Other");
        assert_eq!(next.prename_other_en, "Professor");
        assert_eq!(next.prename_th, "นาย");
    }

    #[test]
    fn selecting_other_clears_opposite_override_only() {
        let mut person = blank();
        person.prename_th = "นาย".to_string();
        person.prename_en = "Mr.".to_string();
        person.prename_other_en = "stale".to_string();
        person.prename_other_th = "kept".to_string();
        let next = map_prename(&person, PrenameSide::Thai, PRENAME_OTHER_TH);
        assert_eq!(next.prename_en, "Other");
        assert!(next.prename_other_en.is_empty());
        assert_eq!(next.prename_other_th, "kept");
    }

    #[test]
    fn switching_away_from_other_clears_same_language_override() {
        let mut person = blank();
        person.prename_th = PRENAME_OTHER_TH.to_string();
        person.prename_other_th = "ดร.".to_string();
        person.prename_en = "Other".to_string();
        person.prename_other_en = "Dr.".to_string();
        let next = map_prename(&person, PrenameSide::English, "Mrs.");
        // English override clears because the English side changed; the Thai
        // side was custom, so it stays untouched.
        assert!(next.prename_other_en.is_empty());
        assert_eq!(next.prename_th, PRENAME_OTHER_TH);
        assert_eq!(next.prename_other_th, "ดร.");
        assert_eq!(next.prename_en, "Mrs.");
    }

    #[test]
    fn other_then_mapped_english_resolves_cleanly() {
        let step_one = map_prename(&blank(), PrenameSide::Thai, PRENAME_OTHER_TH);
        assert_eq!(step_one.prename_en, "Other");
        let step_two = map_prename(&step_one, PrenameSide::English, "Mr");
        assert_eq!(step_two.prename_th, "นาย");
        assert_eq!(step_two.prename_en, "Mr");
        assert!(step_two.prename_other_th.is_empty());
        assert!(step_two.prename_other_en.is_empty());
    }
}
