//! Pure formatting helpers shared by every screen.

use chrono::NaiveDate;

/// Indian-grouped rupee amount: 1245000 -> "₹12,45,000".
pub fn currency(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

/// Compact amount for stat tiles: 24000000 -> "₹2.4 Cr", 450000 -> "₹4.5 L".
pub fn compact(amount: u64) -> String {
    if amount >= 10_000_000 {
        format!("₹{:.1} Cr", amount as f64 / 10_000_000.0)
    } else if amount >= 100_000 {
        format!("₹{:.1} L", amount as f64 / 100_000.0)
    } else {
        currency(amount)
    }
}

/// "2026-03-12" -> "12 Mar". Unparseable input is returned as-is.
pub fn short_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// "2026-03-12" -> "12 Mar 2026". Unparseable input is returned as-is.
pub fn long_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Signed percent with one decimal: 9.4 -> "+9.4%".
pub fn signed_percent(value: f64) -> String {
    if value >= 0.0 {
        format!("+{value:.1}%")
    } else {
        format!("{value:.1}%")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_uses_indian_grouping() {
        assert_eq!(currency(0), "₹0");
        assert_eq!(currency(999), "₹999");
        assert_eq!(currency(1_000), "₹1,000");
        assert_eq!(currency(12_450), "₹12,450");
        assert_eq!(currency(1_245_000), "₹12,45,000");
        assert_eq!(currency(123_456_789), "₹12,34,56,789");
    }

    #[test]
    fn compact_picks_lakh_and_crore() {
        assert_eq!(compact(24_000_000), "₹2.4 Cr");
        assert_eq!(compact(450_000), "₹4.5 L");
        assert_eq!(compact(9_500), "₹9,500");
    }

    #[test]
    fn dates_render_en_in_style() {
        assert_eq!(short_date("2026-03-12"), "12 Mar");
        assert_eq!(long_date("2026-03-12"), "12 Mar 2026");
        assert_eq!(short_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn signed_percent_keeps_sign() {
        assert_eq!(signed_percent(9.4), "+9.4%");
        assert_eq!(signed_percent(-2.05), "-2.1%");
    }
}
