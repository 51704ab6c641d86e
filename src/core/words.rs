//! English words for signed integers, short-scale grouping.

const BELOW_TWENTY: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

// Seven groups of three digits cover every u64, hence every |i64|.
const SCALES: [&str; 7] = [
    "",
    "Thousand",
    "Million",
    "Billion",
    "Trillion",
    "Quadrillion",
    "Quintillion",
];

/// Spell out `n`, e.g. `1994` -> `"One Thousand Nine Hundred Ninety Four"`.
pub fn to_words(n: i64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut remaining = n.unsigned_abs();
    let mut groups: Vec<String> = Vec::new();

    for scale in SCALES {
        if remaining == 0 {
            break;
        }
        let group = remaining % 1000;
        if group > 0 {
            let mut words = spell_group(group);
            if !scale.is_empty() {
                words.push(' ');
                words.push_str(scale);
            }
            groups.push(words);
        }
        remaining /= 1000;
    }

    groups.reverse();
    let spelled = groups.join(" ");

    if n < 0 {
        format!("Negative {}", spelled)
    } else {
        spelled
    }
}

/// Words for 1..=999.
fn spell_group(group: u64) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(4);

    let hundreds = (group / 100) as usize;
    if hundreds > 0 {
        parts.push(BELOW_TWENTY[hundreds]);
        parts.push("Hundred");
    }

    let rest = (group % 100) as usize;
    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            parts.push(BELOW_TWENTY[rest % 10]);
        }
    } else if rest > 0 {
        parts.push(BELOW_TWENTY[rest]);
    }

    parts.join(" ")
}
