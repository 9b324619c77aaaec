/// Digit grouping the Indonesian way: 4500000 -> "4.500.000"
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// 4500000 -> "Rp 4.500.000"
pub fn format_rupiah(amount: i64) -> String {
    if amount < 0 {
        format!("-Rp {}", format_thousands(amount.checked_neg().unwrap_or(i64::MAX)))
    } else {
        format!("Rp {}", format_thousands(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(950), "950");
        assert_eq!(format_thousands(1_000), "1.000");
        assert_eq!(format_thousands(-12_345_678), "-12.345.678");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(4_500_000), "Rp 4.500.000");
        assert_eq!(format_rupiah(-1_000), "-Rp 1.000");
    }
}
