//! Number formatting for stat cards

/// Group digits in threes with commas: `12345` -> `"12,345"`
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Revenue in millions of riyals with one decimal: `12_500_000.0` -> `"SAR 12.5M"`
pub fn format_sar_millions(amount: f64) -> String {
    format!("SAR {:.1}M", amount / 1_000_000.0)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
