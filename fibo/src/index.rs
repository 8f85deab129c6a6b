use crate::Error;

/// Parses a term index given as decimal text.
///
/// Negative numbers get their own error so callers can tell them apart
/// from input that is not a number at all.
pub fn parse_index(input: &str) -> Result<u64, Error> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<u64>() {
        return Ok(n);
    }
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err(Error::NegativeIndex(n)),
        _ => Err(Error::InvalidIndex(input.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn accepts_decimal_indices() {
        assert_eq!(parse_index("30"), Ok(30));
        assert_eq!(parse_index("0"), Ok(0));
        assert_eq!(parse_index(" 7 "), Ok(7));
        assert_eq!(parse_index("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn rejects_negative_indices() {
        assert_eq!(parse_index("-1"), Err(Error::NegativeIndex(-1)));
        assert_eq!(parse_index(" -30"), Err(Error::NegativeIndex(-30)));
    }

    #[test]
    fn rejects_non_numbers() {
        for input in ["abc", "", "1.5", "0x10", "--"] {
            assert_eq!(
                parse_index(input),
                Err(Error::InvalidIndex(input.to_string()))
            );
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            parse_index("-4").unwrap_err().to_string(),
            "index must be non-negative, got -4"
        );
        assert_eq!(
            parse_index("x").unwrap_err().to_string(),
            "invalid index \"x\": expected a non-negative integer"
        );
    }
}
