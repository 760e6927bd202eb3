//! Identifier normalization.
//!
//! Table names come from type names (`BlogPost` -> `blog_posts`), foreign key
//! columns from table names (`users` -> `user_id`). Only the last
//! underscore-separated word is inflected.

use convert_case::{Boundary, Case, Casing};

/// Irregular (singular, plural) pairs. Checked in both directions.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "persons"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
];

/// Plurals that singularize to a different word than `IRREGULAR` would yield.
const EXTRA_PLURALS: &[(&str, &str)] = &[("people", "person")];

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "fish",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// Words ending in `-fe` that take `-ves`.
const FE_VES: &[&str] = &["knife", "life", "wife"];

/// Words ending in a consonant + `o` that take `-es`.
const O_ES: &[&str] = &["echo", "hero", "potato", "tomato", "veto"];

/// Words ending in `-s` whose plural adds `-es`.
const S_ES: &[&str] = &["alias", "gas", "tlas", "tmas", "ris"];

/// Stems of `-sis` words, whose plural is `<stem>ses`.
const SIS_STEMS: &[&str] = &["analy", "diagno", "parenthe", "progno", "synop", "the", "empha", "cri"];

/// Digits stay attached to the letters before them; only a digit followed by
/// an uppercase letter starts a new word (`Oauth2Tokens` -> `oauth2_tokens`).
const DIGIT_BOUNDARIES: [Boundary; 3] = [Boundary::LowerDigit, Boundary::UpperDigit, Boundary::DigitLower];

/// Convert an identifier to lower_snake_case.
pub fn snake_case(name: &str) -> String {
    name.remove_boundaries(&DIGIT_BOUNDARIES).to_case(Case::Snake)
}

/// Table name for a type name: snake_case, then pluralized.
pub fn table_name(type_name: &str) -> String {
    pluralize(&snake_case(type_name))
}

/// Default foreign key column referencing `table`.
pub fn foreign_key(table: &str) -> String {
    format!("{}_id", singularize(table))
}

/// Pluralize the last word of a snake_case identifier.
pub fn pluralize(name: &str) -> String {
    inflect_last_word(name, pluralize_word)
}

/// Singularize the last word of a snake_case identifier.
pub fn singularize(name: &str) -> String {
    inflect_last_word(name, singularize_word)
}

fn inflect_last_word(name: &str, inflect: fn(&str) -> String) -> String {
    match name.rsplit_once('_') {
        Some((head, last)) if !last.is_empty() => format!("{}_{}", head, inflect(last)),
        _ => inflect(name),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Character before the last `n` characters, if any.
fn char_before(word: &str, n: usize) -> Option<char> {
    word.chars().rev().nth(n)
}

fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if lower == *singular {
            return plural.to_string();
        }
        if lower == *plural {
            return word.to_string();
        }
    }
    if EXTRA_PLURALS.iter().any(|(plural, _)| lower == *plural) {
        return word.to_string();
    }

    if S_ES.iter().any(|s| lower.ends_with(s)) {
        return format!("{}es", word);
    }
    if lower.ends_with("is") && lower.len() > 2 {
        return format!("{}es", &word[..word.len() - 2]);
    }
    if lower.ends_with("us") || ["ss", "sh", "ch", "x", "z"].iter().any(|s| lower.ends_with(s)) {
        return format!("{}es", word);
    }
    // Any other trailing `s` is taken as already plural.
    if lower.ends_with('s') {
        return word.to_string();
    }
    if lower.ends_with('y') && char_before(&lower, 1).is_some_and(|c| !is_vowel(c)) {
        return format!("{}ies", &word[..word.len() - 1]);
    }
    if FE_VES.contains(&lower.as_str()) {
        return format!("{}ves", &word[..word.len() - 2]);
    }
    if lower.ends_with("lf") || lower.ends_with("eaf") {
        return format!("{}ves", &word[..word.len() - 1]);
    }
    if O_ES.contains(&lower.as_str()) {
        return format!("{}es", word);
    }

    format!("{}s", word)
}

fn singularize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    for (singular, plural) in IRREGULAR {
        if lower == *plural {
            return singular.to_string();
        }
        if lower == *singular {
            return word.to_string();
        }
    }
    for (plural, singular) in EXTRA_PLURALS {
        if lower == *plural {
            return singular.to_string();
        }
    }

    let len = word.len();
    if S_ES.iter().any(|s| lower.ends_with(s)) {
        return word.to_string();
    }
    if SIS_STEMS.iter().any(|stem| lower.ends_with(&format!("{}ses", stem))) {
        return format!("{}is", &word[..len - 2]);
    }
    if S_ES.iter().any(|s| lower.ends_with(&format!("{}es", s))) {
        return word[..len - 2].to_string();
    }
    if lower.ends_with("ies") && len > 3 && char_before(&lower, 3).is_some_and(|c| !is_vowel(c)) {
        return format!("{}y", &word[..len - 3]);
    }
    if FE_VES.iter().any(|w| lower == format!("{}ves", &w[..w.len() - 2])) {
        return format!("{}fe", &word[..len - 3]);
    }
    if lower.ends_with("lves") || lower.ends_with("eaves") {
        return format!("{}f", &word[..len - 3]);
    }
    if O_ES.iter().any(|w| lower == format!("{}es", w)) {
        return word[..len - 2].to_string();
    }
    if ["sses", "shes", "ches", "xes", "zes"].iter().any(|s| lower.ends_with(s)) {
        return word[..len - 2].to_string();
    }
    if lower.ends_with("uses") && char_before(&lower, 4).is_some_and(|c| !matches!(c, 'a' | 'o' | 'u')) {
        return word[..len - 2].to_string();
    }
    if lower.ends_with("ss") || lower.ends_with("us") || lower.ends_with("is") {
        return word.to_string();
    }
    if lower.ends_with('s') {
        return word[..len - 1].to_string();
    }

    word.to_string()
}
