/// Common utility functions.
use crate::field::FieldValueType;

/// Converts string into unsigned number, `None` for anything non-numeric.
pub(crate) fn parse_digital_value(input: &str) -> Option<FieldValueType> {
    input.parse::<FieldValueType>().ok()
}

/// Converts a 3-letter mnemonic value into its position in the table.
///
/// Matching is case-insensitive but exact: longer names never match partially.
pub(crate) fn parse_alias_value(input: &str, values: &[&str]) -> Option<FieldValueType> {
    if input.is_empty() {
        None
    } else {
        values
            .iter()
            .position(|&x| x.eq_ignore_ascii_case(input))
            .map(|i| i as FieldValueType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digital_value_valid() {
        assert_eq!(parse_digital_value("5"), Some(5));
        assert_eq!(parse_digital_value("0"), Some(0));
        assert_eq!(parse_digital_value("05"), Some(5));
        assert_eq!(parse_digital_value("65535"), Some(65535));
    }

    #[test]
    fn parse_digital_value_invalid() {
        assert_eq!(parse_digital_value("abc"), None);
        assert_eq!(parse_digital_value(""), None);
        assert_eq!(parse_digital_value("-1"), None);
        assert_eq!(parse_digital_value("1.5"), None);
        assert_eq!(parse_digital_value("65536"), None);
        assert_eq!(parse_digital_value("1 "), None);
    }

    #[test]
    fn parse_alias_value_regular() {
        let months = &["JAN", "FEB", "MAR"];

        assert_eq!(parse_alias_value("jan", months), Some(0));
        assert_eq!(parse_alias_value("FEB", months), Some(1));
        assert_eq!(parse_alias_value("MaR", months), Some(2));

        assert_eq!(parse_alias_value("", months), None);
        assert_eq!(parse_alias_value("dec", months), None);
        assert_eq!(parse_alias_value("january", months), None);
        assert_eq!(parse_alias_value("ja", months), None);
        assert_eq!(parse_alias_value("j@n", months), None);
    }

    #[test]
    fn parse_alias_value_empty_table() {
        let empty: &[&str] = &[];
        assert_eq!(parse_alias_value("test", empty), None);
    }

    #[test]
    fn parse_alias_value_whitespace() {
        let table = &["TST", "VAL"];
        assert_eq!(parse_alias_value(" tst ", table), None);
        assert_eq!(parse_alias_value("\ttst", table), None);
    }
}
