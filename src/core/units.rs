//! Human-readable quantities

/// Base used when scaling quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HumanBase {
    /// SI prefixes: k, M, G, ...
    Decimal,
    /// IEC prefixes: Ki, Mi, Gi, ...
    #[default]
    Binary,
}

impl HumanBase {
    const DECIMAL_PREFIXES: [&'static str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];
    const BINARY_PREFIXES: [&'static str; 9] =
        ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"];

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1000 => Some(HumanBase::Decimal),
            1024 => Some(HumanBase::Binary),
            _ => None,
        }
    }

    pub fn as_i32(self) -> i32 {
        match self {
            HumanBase::Decimal => 1000,
            HumanBase::Binary => 1024,
        }
    }

    fn prefixes(self) -> &'static [&'static str] {
        match self {
            HumanBase::Decimal => &Self::DECIMAL_PREFIXES,
            HumanBase::Binary => &Self::BINARY_PREFIXES,
        }
    }
}

/// Scale `value` down by `base` until it is below one unit of the next
/// prefix, and print it with one decimal followed by a space and the prefix.
///
/// `format_human(1536.0, Binary)` is `"1.5 Ki"`; the unit itself (B, B/s, ...)
/// is left to the caller.
pub fn format_human(value: f64, base: HumanBase) -> String {
    let divisor = base.as_i32() as f64;
    let prefixes = base.prefixes();

    let mut scaled = value;
    let mut i = 0;
    while i < prefixes.len() - 1 && scaled >= divisor {
        scaled /= divisor;
        i += 1;
    }

    format!("{:.1} {}", scaled, prefixes[i])
}

/// Print `value` like C's `%.*g`: `precision` significant digits, trailing
/// zeros dropped, exponent form outside `1e-4..10^precision`.
fn format_significant(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // The exponent after rounding to `precision` digits decides the style
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Like [`format_human`], but with three significant digits instead of one
/// decimal. Scaling starts at 999.5 so that no value prints as `1e+03`, and
/// values below one unit get two digits.
///
/// `format_human_3(1536.0, Binary)` is `"1.5 Ki"`, `format_human_3(1000.0, Binary)`
/// is `"0.98 Ki"`.
pub fn format_human_3(value: f64, base: HumanBase) -> String {
    let divisor = base.as_i32() as f64;
    let prefixes = base.prefixes();

    let mut scaled = value;
    let mut i = 0;
    while i < prefixes.len() - 1 && scaled >= 999.5 {
        scaled /= divisor;
        i += 1;
    }

    let precision = if scaled < 1.0 { 2 } else { 3 };
    format!("{} {}", format_significant(scaled, precision), prefixes[i])
}

/// Which human-readable formatter `value`-style modes use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HumanFormat {
    /// One decimal: `"1.5 Ki"`, `"512.0 "`
    Fixed,
    /// Three significant digits: `"1.5 Ki"`, `"512 "`
    #[default]
    Significant,
}

impl HumanFormat {
    /// Get name for settings file
    pub fn name(self) -> &'static str {
        match self {
            HumanFormat::Fixed => "fixed",
            HumanFormat::Significant => "significant",
        }
    }

    /// Parse from settings file name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fixed" => Some(HumanFormat::Fixed),
            "significant" => Some(HumanFormat::Significant),
            _ => None,
        }
    }

    pub fn format(self, value: f64, base: HumanBase) -> String {
        match self {
            HumanFormat::Fixed => format_human(value, base),
            HumanFormat::Significant => format_human_3(value, base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_base_from_i32() {
        assert_eq!(HumanBase::from_i32(1000), Some(HumanBase::Decimal));
        assert_eq!(HumanBase::from_i32(1024), Some(HumanBase::Binary));
        assert_eq!(HumanBase::from_i32(1023), None);
        assert_eq!(HumanBase::default(), HumanBase::Binary);
    }

    #[test]
    fn test_format_human_no_prefix() {
        assert_eq!(format_human(0.0, HumanBase::Binary), "0.0 ");
        assert_eq!(format_human(512.0, HumanBase::Binary), "512.0 ");
        assert_eq!(format_human(999.0, HumanBase::Decimal), "999.0 ");
    }

    #[test]
    fn test_format_human_binary() {
        assert_eq!(format_human(1024.0, HumanBase::Binary), "1.0 Ki");
        assert_eq!(format_human(1536.0, HumanBase::Binary), "1.5 Ki");
        assert_eq!(format_human(3.0 * 1024.0 * 1024.0, HumanBase::Binary), "3.0 Mi");
    }

    #[test]
    fn test_format_human_decimal() {
        assert_eq!(format_human(1000.0, HumanBase::Decimal), "1.0 k");
        assert_eq!(format_human(2_500_000.0, HumanBase::Decimal), "2.5 M");
        assert_eq!(format_human(7.3e9, HumanBase::Decimal), "7.3 G");
    }

    #[test]
    fn test_format_human_caps_at_largest_prefix() {
        assert_eq!(format_human(1e27, HumanBase::Decimal), "1000.0 Y");
    }

    // ==================== Significant Digits Tests ====================

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(0.0, 3), "0");
        assert_eq!(format_significant(512.0, 3), "512");
        assert_eq!(format_significant(1.5, 3), "1.5");
        assert_eq!(format_significant(12.34, 3), "12.3");
        assert_eq!(format_significant(7.0, 3), "7");
        assert_eq!(format_significant(0.9765625, 2), "0.98");
        assert_eq!(format_significant(999.4, 3), "999");
        assert_eq!(format_significant(1234.0, 3), "1.23e+03");
        assert_eq!(format_significant(0.00001234, 3), "1.23e-05");
    }

    #[test]
    fn test_format_human_3_no_prefix() {
        assert_eq!(format_human_3(0.0, HumanBase::Binary), "0 ");
        assert_eq!(format_human_3(512.0, HumanBase::Binary), "512 ");
        assert_eq!(format_human_3(999.0, HumanBase::Decimal), "999 ");
    }

    #[test]
    fn test_format_human_3_scales_from_999_5() {
        assert_eq!(format_human_3(1536.0, HumanBase::Binary), "1.5 Ki");
        assert_eq!(format_human_3(1000.0, HumanBase::Binary), "0.98 Ki");
        assert_eq!(format_human_3(123_456.0, HumanBase::Decimal), "123 k");
        assert_eq!(format_human_3(999_999.0, HumanBase::Decimal), "1 M");
        assert_eq!(format_human_3(3120.0 * 1024.0 * 1024.0, HumanBase::Binary), "3.05 Gi");
    }

    #[test]
    fn test_human_format_names() {
        for format in [HumanFormat::Fixed, HumanFormat::Significant] {
            assert_eq!(HumanFormat::from_name(format.name()), Some(format));
        }
        assert_eq!(HumanFormat::from_name("g"), None);
        assert_eq!(HumanFormat::default(), HumanFormat::Significant);
    }

    #[test]
    fn test_human_format_dispatch() {
        assert_eq!(HumanFormat::Fixed.format(512.0, HumanBase::Binary), "512.0 ");
        assert_eq!(HumanFormat::Significant.format(512.0, HumanBase::Binary), "512 ");
    }
}
