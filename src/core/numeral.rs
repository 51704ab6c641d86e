//! Roman numeral validation and decoding.
//!
//! Validation only checks the character set. Well-formedness is not
//! enforced, so `IIII` and `VV` decode by plain addition.

const SYMBOLS: &str = "IVXLCDM";

/// Value of a single symbol, case-insensitive. Unknown symbols are worth 0.
fn symbol_value(symbol: char) -> i64 {
    match symbol.to_ascii_uppercase() {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// True when every character is one of the seven symbols, in either case.
/// The empty token has nothing to reject and validates.
pub fn validate(token: &str) -> bool {
    token
        .chars()
        .all(|c| SYMBOLS.contains(c.to_ascii_uppercase()))
}

/// Subtractive scan: a symbol smaller than its successor is subtracted,
/// everything else is added. The final symbol has a lookahead of 0.
///
/// Callers are expected to [`validate`] first.
pub fn decode(token: &str) -> i64 {
    let values: Vec<i64> = token.chars().map(symbol_value).collect();

    let mut total: i64 = 0;
    for (i, &value) in values.iter().enumerate() {
        let next = values.get(i + 1).copied().unwrap_or(0);
        total = if value < next {
            total.wrapping_sub(value)
        } else {
            total.wrapping_add(value)
        };
    }
    total
}
