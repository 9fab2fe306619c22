//! Classification of a single line of a ROM dump.
//!
//! A dump line looks like `LABEL;VALUE;NOTE`. Only the second column is
//! used, every other column may hold anything.

use std::convert::TryFrom;

const SEPARATOR: char = ';';

/// What a single line contributes to the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    /// Nothing but whitespace.
    Blank,
    /// Fewer than two columns.
    Short,
    /// The value column is not a decimal integer.
    NotNumeric,
    Byte(u8),
}

/// A value column that is a well-formed integer but not a legal byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    pub value: String,
}

fn is_integer(token: &str) -> bool {
    let digits = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// Unicode whitespace plus the ASCII file/group/record/unit separators.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn parse_record(line: &str) -> Result<Record, OutOfRange> {
    let line = line.trim_matches(is_strippable);
    if line.is_empty() {
        return Ok(Record::Blank);
    }

    let mut columns = line.split(SEPARATOR);
    let value = match (columns.next(), columns.next()) {
        (Some(_), Some(value)) => value,
        _ => return Ok(Record::Short),
    };

    if !is_integer(value) {
        return Ok(Record::NotNumeric);
    }

    // Anything that overflows i64 is numeric too, just far out of range.
    let out_of_range = || OutOfRange {
        value: value.to_string(),
    };
    let number: i64 = value.parse().map_err(|_| out_of_range())?;
    u8::try_from(number)
        .map(Record::Byte)
        .map_err(|_| out_of_range())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn out_of_range(value: &str) -> Result<Record, OutOfRange> {
        Err(OutOfRange {
            value: value.to_string(),
        })
    }

    #[test]
    fn blank() {
        assert_eq!(parse_record(""), Ok(Record::Blank));
        assert_eq!(parse_record("  \t\r\n"), Ok(Record::Blank));
        assert_eq!(parse_record("\x1c\x1d\x1e\x1f\x0b\x0c"), Ok(Record::Blank));
    }

    #[test]
    fn short() {
        assert_eq!(parse_record("garbage"), Ok(Record::Short));
        assert_eq!(parse_record("42"), Ok(Record::Short));
    }

    #[test]
    fn not_numeric() {
        assert_eq!(parse_record("LABEL;abc;note"), Ok(Record::NotNumeric));
        assert_eq!(parse_record("A;1.5"), Ok(Record::NotNumeric));
        assert_eq!(parse_record("A;12x"), Ok(Record::NotNumeric));
        assert_eq!(parse_record("A;"), Ok(Record::NotNumeric));
        assert_eq!(parse_record("A;-"), Ok(Record::NotNumeric));
        assert_eq!(parse_record("A; 12"), Ok(Record::NotNumeric));
        assert_eq!(parse_record(";;10"), Ok(Record::NotNumeric));
    }

    #[test]
    fn bytes() {
        assert_eq!(parse_record("A;10;x"), Ok(Record::Byte(10)));
        assert_eq!(parse_record("B;20"), Ok(Record::Byte(20)));
        assert_eq!(parse_record("  C;7;note  \r\n"), Ok(Record::Byte(7)));
        assert_eq!(parse_record("D;+5"), Ok(Record::Byte(5)));
        assert_eq!(parse_record("E;-0"), Ok(Record::Byte(0)));
        assert_eq!(parse_record(";255;a;b;c"), Ok(Record::Byte(255)));
        assert_eq!(parse_record("\x1eF;9\x1f"), Ok(Record::Byte(9)));
    }

    #[test]
    fn boundaries() {
        assert_eq!(parse_record("A;0"), Ok(Record::Byte(0)));
        assert_eq!(parse_record("A;255"), Ok(Record::Byte(255)));
        assert_eq!(parse_record("A;-1"), out_of_range("-1"));
        assert_eq!(parse_record("A;256"), out_of_range("256"));
    }

    #[test]
    fn huge_values_are_fatal() {
        assert_eq!(
            parse_record("A;99999999999999999999;x"),
            out_of_range("99999999999999999999")
        );
    }
}
