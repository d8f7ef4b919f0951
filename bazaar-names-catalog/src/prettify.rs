//! Fallback prettifier: derive a readable name from an id alone.
//!
//! Used when the items resource has no entry (or no name) for a Bazaar
//! product. `ENCHANTMENT_TURBO_WHEAT_3` becomes `Turbo Wheat III`.

use crate::overrides::name_override;
use crate::roman::to_roman;

const ENCHANTMENT_PREFIX: &str = "ENCHANTMENT_";
const ULTIMATE_PREFIX: &str = "ULTIMATE_";

/// Convert an uppercase, underscore-delimited id into a title-cased phrase,
/// re-encoding a trailing number as a Roman numeral.
///
/// # Examples
///
/// ```
/// use bazaar_names_catalog::prettify::prettify;
///
/// assert_eq!(prettify("SOME_ENCHANT_5"), "Some Enchant V");
/// assert_eq!(prettify("ENCHANTMENT_ULTIMATE_LEGION_2"), "Legion II");
/// assert_eq!(prettify("ENCHANTED_DIAMOND"), "Enchanted Diamond");
/// ```
pub fn prettify(id: &str) -> String {
    let mut clean = id.strip_prefix(ENCHANTMENT_PREFIX).unwrap_or(id);
    // Overridden ultimates (Wise, Jerry) keep the word.
    if name_override(id).is_none() {
        clean = clean.strip_prefix(ULTIMATE_PREFIX).unwrap_or(clean);
    }

    let title = title_case(clean);
    if !title.ends_with(|c: char| c.is_ascii_digit()) {
        return title;
    }

    match title.rsplit_once(' ') {
        Some((head, number)) => match level_numeral(number) {
            Some(numeral) => format!("{head} {numeral}"),
            None => title,
        },
        None => level_numeral(&title).unwrap_or(title),
    }
}

/// Roman numeral for a trailing level; zero stays literal.
fn level_numeral(token: &str) -> Option<String> {
    let n: u64 = token.parse().ok()?;
    Some(to_roman(n).unwrap_or_else(|| n.to_string()))
}

/// Lowercase `s`, split it into words and capitalize each one.
pub(crate) fn title_case(s: &str) -> String {
    split_words(&s.to_lowercase())
        .iter()
        .map(|word| capitalize(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split on anything that is not a letter or digit, and between letters and
/// digits. Ordinals (`1st`, `22nd`) stay one word.
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        if chars[i].is_ascii_digit() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            i += ordinal_suffix_len(&chars[start..i], &chars[i..]);
        } else if is_letter(chars[i]) {
            while i < chars.len() && is_letter(chars[i]) {
                i += 1;
            }
        } else {
            i += 1;
            continue;
        }
        words.push(chars[start..i].iter().collect());
    }

    words
}

fn is_letter(c: char) -> bool {
    c.is_alphanumeric() && !c.is_ascii_digit()
}

/// Length of an ordinal suffix matching the last digit, if one follows and
/// ends the word.
fn ordinal_suffix_len(digits: &[char], rest: &[char]) -> usize {
    let expected = match digits.last() {
        Some('1') => ['s', 't'],
        Some('2') => ['n', 'd'],
        Some('3') => ['r', 'd'],
        Some(_) => ['t', 'h'],
        None => return 0,
    };
    if rest.len() >= 2
        && rest[..2] == expected
        && rest.get(2).is_none_or(|&c| !is_letter(c))
    {
        2
    } else {
        0
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
