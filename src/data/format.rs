//! Display formatting for counters, uptime, and rank labels.

/// Format a non-negative integer with `,` thousands separators.
///
/// Digits are grouped in runs of three from the least-significant digit;
/// no separator is ever placed before the first digit.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a monetary amount with `,` thousands separators.
///
/// Whole amounts render without a decimal part; fractional amounts keep
/// two decimal places, rounded to the nearest cent.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let mut out = format_thousands(cents / 100);
    if cents % 100 != 0 {
        out.push_str(&format!(".{:02}", cents % 100));
    }
    if amount.is_sign_negative() && cents > 0 {
        out.insert(0, '-');
    }
    out
}

/// Decompose a second count into days/hours/minutes/seconds for display.
///
/// Zero-valued units are omitted; the seconds unit is emitted when nonzero
/// or when nothing else was, so the result is never empty (0 -> "0s").
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

/// Label for a 0-based rank in the top-users list.
///
/// The first three ranks get medal glyphs; the rest get their 1-based
/// numeric rank.
pub fn rank_label(rank: usize) -> String {
    match rank {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => format!("{}.", n + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_small() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(7), "7");
        assert_eq!(format_thousands(999), "999");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(12345), "12,345");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(1000000000), "1,000,000,000");
    }

    #[test]
    fn test_thousands_never_leads_with_separator() {
        // Exact multiples of three digits must not start with a comma
        assert_eq!(format_thousands(100), "100");
        assert_eq!(format_thousands(100000), "100,000");
    }

    #[test]
    fn test_amount_whole() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(300.0), "300");
        assert_eq!(format_amount(980_000.0), "980,000");
    }

    #[test]
    fn test_amount_fractional() {
        assert_eq!(format_amount(300.5), "300.50");
        assert_eq!(format_amount(1234.56), "1,234.56");
        // Rounds to the nearest cent, carrying into the whole part
        assert_eq!(format_amount(999.999), "1,000");
    }

    #[test]
    fn test_uptime_zero() {
        assert_eq!(format_uptime(0), "0s");
    }

    #[test]
    fn test_uptime_single_units() {
        assert_eq!(format_uptime(59), "59s");
        assert_eq!(format_uptime(60), "1m");
        assert_eq!(format_uptime(3600), "1h");
        assert_eq!(format_uptime(86_400), "1d");
    }

    #[test]
    fn test_uptime_omits_zero_units() {
        // 1 day, 0 hours, 5 minutes, 0 seconds
        assert_eq!(format_uptime(86_400 + 300), "1d 5m");
        // 2 hours, 30 seconds
        assert_eq!(format_uptime(7230), "2h 30s");
    }

    #[test]
    fn test_uptime_full_cascade() {
        // 1d 2h 3m 4s
        assert_eq!(format_uptime(86_400 + 7200 + 180 + 4), "1d 2h 3m 4s");
    }

    #[test]
    fn test_uptime_recomposition() {
        // d*86400 + h*3600 + m*60 + s always equals the input
        for secs in [0u64, 1, 59, 61, 3599, 3661, 86_399, 90_061, 1_000_000] {
            let days = secs / 86_400;
            let hours = (secs % 86_400) / 3600;
            let minutes = (secs % 3600) / 60;
            let seconds = secs % 60;
            assert_eq!(days * 86_400 + hours * 3600 + minutes * 60 + seconds, secs);
            assert!(!format_uptime(secs).is_empty());
        }
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(rank_label(0), "🥇");
        assert_eq!(rank_label(1), "🥈");
        assert_eq!(rank_label(2), "🥉");
        assert_eq!(rank_label(3), "4.");
        assert_eq!(rank_label(9), "10.");
    }
}
