//! Human-readable integers: `12345678` → `"12.3 million"`, `123` → `"123"`.

use num_format::{Locale, ToFormattedString};

/// Word scales, one per power of a thousand starting at 10^3.
const SCALES: [&str; 6] = [
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Approximate word form with one decimal, e.g. `1_234_567` → `"1.2 million"`.
///
/// Below one thousand the plain digits are returned. When rounding would print
/// `1000.0 <scale>` the next scale is used instead (`999_999` → `"1.0 million"`).
pub fn intword(value: u64) -> String {
    if value < 1_000 {
        return value.to_string();
    }
    let v = value as f64;
    let mut power = 1_000f64;
    for (i, name) in SCALES.iter().enumerate() {
        let next = power * 1_000.0;
        if v < next || i == SCALES.len() - 1 {
            let chopped = format!("{:.1}", v / power);
            if chopped == "1000.0" && i + 1 < SCALES.len() {
                return format!("{:.1} {}", v / next, SCALES[i + 1]);
            }
            return format!("{chopped} {name}");
        }
        power = next;
    }
    value.to_string()
}

/// Word form when it says something the digits don't, otherwise comma-grouped digits.
pub fn humanize(value: u64) -> String {
    let word = intword(value);
    if word == value.to_string() {
        value.to_formatted_string(&Locale::en)
    } else {
        word
    }
}

/// [`humanize`] for day-over-day deltas, which may be negative.
pub fn humanize_signed(value: i64) -> String {
    let abs = humanize(value.unsigned_abs());
    if value < 0 { format!("-{abs}") } else { abs }
}
