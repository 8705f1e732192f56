//! 显示格式化辅助

/// 价格的显示文本
///
/// 采用 f64 的最短十进制表示：整数价格不带小数点（12 → "12"），
/// 小数按需保留（7.5 → "7.5"）。解析失败的价格显示为 "NaN"。
pub fn fmt_price(price: f64) -> String {
    format!("{price}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_prices_have_no_decimal_point() {
        assert_eq!(fmt_price(12.0), "12");
        assert_eq!(fmt_price(0.0), "0");
    }

    #[test]
    fn fractional_prices_keep_their_digits() {
        assert_eq!(fmt_price(7.5), "7.5");
        assert_eq!(fmt_price(8.25), "8.25");
    }

    #[test]
    fn unparseable_prices_display_as_nan() {
        assert_eq!(fmt_price(f64::NAN), "NaN");
    }
}
