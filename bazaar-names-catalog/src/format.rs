//! Display-name formatting for Bazaar products.
//!
//! Resolution order for a product id:
//! ```text
//! override table  >  cleaned catalog name  >  prettified id + rewrite rules
//! ```

use crate::overrides::name_override;
use crate::prettify::prettify;

/// Prefix of fragged (starred) dungeon items.
const STARRED_PREFIX: &str = "STARRED_";

/// Glyph prepended to starred item names.
pub const STARRED_GLYPH: char = '\u{269A}';

/// Derive the display name for `id`.
///
/// `raw_name` is the catalog name, if the items resource has one. An empty
/// name counts as missing.
///
/// # Examples
///
/// ```
/// use bazaar_names_catalog::format::format_name;
///
/// assert_eq!(format_name(Some("§aFancy %%NUM%% Sword"), "FANCY_SWORD"), "Fancy Sword");
/// assert_eq!(format_name(None, "SHARD_WOLF"), "Wolf Shard");
/// assert_eq!(format_name(Some("anything"), "ENCHANTED_IRON"), "Enchanted Iron Ingot");
/// ```
pub fn format_name(raw_name: Option<&str>, id: &str) -> String {
    if let Some(name) = name_override(id) {
        return name.to_string();
    }

    if let Some(raw) = raw_name.filter(|name| !name.is_empty()) {
        let cleaned = clean_raw_name(raw);
        if id.starts_with(STARRED_PREFIX) {
            return format!("{STARRED_GLYPH} {cleaned}");
        }
        return cleaned;
    }

    let pretty = prettify(id);
    REWRITE_RULES
        .iter()
        .filter(|rule| id.starts_with(rule.id_prefix))
        .find_map(|rule| (rule.rewrite)(&pretty))
        .unwrap_or(pretty)
}

// ── Raw name cleanup ────────────────────────────────────────────────────────

/// Strip color codes and placeholders from a catalog name, then trim it and
/// collapse the whitespace the removed tokens leave behind.
pub fn clean_raw_name(raw: &str) -> String {
    strip_placeholders(&strip_color_codes(raw))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove `§x` formatting sequences, where `x` is a color (`0-9a-f`), a style
/// (`k-o`) or reset (`r`), in either case. A `§` before anything else is kept.
pub fn strip_color_codes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '§' && chars.peek().is_some_and(|&code| is_format_code(code)) {
            chars.next();
            continue;
        }
        out.push(c);
    }

    out
}

fn is_format_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f' | 'A'..='F' | 'k'..='o' | 'K'..='O' | 'r' | 'R')
}

/// Remove `%%WORD%%` placeholder tokens (`WORD` being one or more of
/// `[A-Za-z0-9_]`). Scanning is left to right and non-overlapping, so
/// `%%%A%%` leaves a single `%`.
pub fn strip_placeholders(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("%%") {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 2..];
        let word_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();

        if word_len > 0 && after[word_len..].starts_with("%%") {
            rest = &after[word_len + 2..];
        } else {
            out.push('%');
            rest = &rest[pos + 1..];
        }
    }

    out.push_str(rest);
    out
}

// ── Fallback rewrites ───────────────────────────────────────────────────────

/// A category-specific fix-up for prettified names, applied when the id starts
/// with `id_prefix`. `rewrite` returns `None` when the name doesn't have the
/// expected shape, letting later rules try.
struct RewriteRule {
    id_prefix: &'static str,
    rewrite: fn(&str) -> Option<String>,
}

/// Evaluated in order; the first rule that produces a name wins.
const REWRITE_RULES: &[RewriteRule] = &[
    RewriteRule {
        id_prefix: "SHARD_",
        rewrite: shard_suffix,
    },
    RewriteRule {
        id_prefix: "ENCHANTMENT_TURBO",
        rewrite: turbo_hyphen,
    },
    RewriteRule {
        id_prefix: "ESSENCE_",
        rewrite: essence_suffix,
    },
];

/// "Shard Wolf" → "Wolf Shard"
fn shard_suffix(name: &str) -> Option<String> {
    name.strip_prefix("Shard ").map(|rest| format!("{rest} Shard"))
}

/// "Turbo Wheat III" → "Turbo-Wheat III"
fn turbo_hyphen(name: &str) -> Option<String> {
    let rest = name.split_once(' ').map_or("", |(_, rest)| rest);
    Some(format!("Turbo-{rest}"))
}

/// "Essence Wither" → "Wither Essence"
fn essence_suffix(name: &str) -> Option<String> {
    name.strip_prefix("Essence ").map(|rest| format!("{rest} Essence"))
}
