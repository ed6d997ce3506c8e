//! Amount text normalization: "1 551,10" -> "1551.10".

const NO_BREAK_SPACE: char = '\u{a0}';

/// Remove thousands separators (plain and no-break spaces) and turn a decimal
/// comma into a dot. Applying it twice gives the same result as once.
pub fn normalize_amount(amount: &str) -> String {
    amount
        .chars()
        .filter(|&c| c != ' ' && c != NO_BREAK_SPACE)
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Drop the first character, whatever it is.
///
/// Outflow amounts always carry their sign in front, so this removes the
/// minus. Empty input stays empty.
pub fn strip_leading_sign(amount: &str) -> &str {
    let mut chars = amount.chars();
    chars.next();
    chars.as_str()
}
