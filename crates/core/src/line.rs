//! Flat line codec primitives.
//!
//! Every persisted record is a single line of comma-separated fields. There is no
//! quoting or escaping: field values must not contain the delimiter or a newline.
//! Decoding is permissive-but-lossy, so a record that cannot be rebuilt yields
//! `None` and the caller skips it.

use core::str::FromStr;

/// Field separator for every persisted line.
pub const DELIMITER: char = ',';

/// Split a line into its raw fields.
///
/// Empty fields (including a trailing one) are kept, so `"a,,b,"` yields four fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(DELIMITER).collect()
}

/// Parse a numeric field, tolerating surrounding whitespace.
pub fn parse_field<T: FromStr>(raw: &str) -> Option<T> {
    raw.trim().parse().ok()
}

/// Whether `field` can be written as-is: no delimiter and no line break.
pub fn is_encodable(field: &str) -> bool {
    !field.contains([DELIMITER, '\n', '\r'])
}

/// A record that can be written to and rebuilt from a single line.
pub trait LineRecord: Sized {
    /// Encode as one line, without the trailing newline.
    fn to_line(&self) -> String;

    /// Rebuild from one line. Returns `None` for unrecognised, short or malformed lines.
    fn from_line(line: &str) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_fields("a,,b,"), vec!["a", "", "b", ""]);
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn encodable_fields_have_no_delimiter_or_line_break() {
        assert!(is_encodable("Navy Polo"));
        assert!(is_encodable(""));
        assert!(!is_encodable("Khan, Ali"));
        assert!(!is_encodable("Polo\nXL"));
        assert!(!is_encodable("Polo\r"));
    }

    #[test]
    fn parse_field_trims_and_rejects() {
        assert_eq!(parse_field::<i64>(" 42 "), Some(42));
        assert_eq!(parse_field::<f64>("19.99"), Some(19.99));
        assert_eq!(parse_field::<i64>("4x"), None);
        assert_eq!(parse_field::<f64>(""), None);
    }
}
