//! Roman numeral encoding for enchantment and tier levels.

const NUMERALS: &[(u64, &str)] = &[
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a standard numeral.
pub const MAX_ROMAN: u64 = 3999;

/// Encode `n` in subtractive Roman notation.
///
/// Returns `None` for zero and for anything above [`MAX_ROMAN`].
pub fn to_roman(n: u64) -> Option<String> {
    if n == 0 || n > MAX_ROMAN {
        return None;
    }

    let mut remaining = n;
    let mut out = String::new();
    for &(value, symbol) in NUMERALS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    Some(out)
}
