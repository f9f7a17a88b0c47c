/// Formats a yen amount with thousands separators, e.g. `-1,234円`.
pub fn format_yen(amount: i64) -> String {
    format!("{}円", group_thousands(amount))
}

pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Uppercases the first character, for error messages shown as sentences.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn formats_currency_and_percent() {
        assert_eq!(format_yen(800), "800円");
        assert_eq!(format_yen(-1300), "-1,300円");
        assert_eq!(format_percent(80.0), "80.0%");
        assert_eq!(format_percent(-43.3), "-43.3%");
    }

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(capitalize("product name required"), "Product name required");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
