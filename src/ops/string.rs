//! String operators.

use crate::contract::assert_string;
use crate::error::Result;
use crate::seq::Seq;
use crate::value::Value;

/// Splits a string on a separator into an indexed sequence of pieces. An
/// empty separator yields the whole string as a single piece.
///
/// # Errors
///
/// Fails with [`Error::NotAString`](crate::Error::NotAString) when either
/// argument is not a string.
pub fn split(separator: &Value, text: &Value) -> Result<Value> {
    let separator = assert_string(separator)?;
    let text = assert_string(text)?;
    if separator.is_empty() {
        return Ok(Value::Seq(Seq::from_values([Value::from(text)])));
    }
    Ok(Value::Seq(Seq::from_values(
        text.split(separator).map(Value::from),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    #[rstest]
    fn test_split() {
        let pieces = split(&Value::from("."), &Value::from("a.b.c.xyz.d")).expect("split");
        let values = pieces.as_seq().expect("seq").to_values().expect("drain");
        assert_eq!(
            values,
            vec![
                Value::from("a"),
                Value::from("b"),
                Value::from("c"),
                Value::from("xyz"),
                Value::from("d"),
            ]
        );
    }

    #[rstest]
    fn test_split_requires_strings() {
        assert_eq!(
            split(&Value::Int(1), &Value::from("a")),
            Err(Error::NotAString)
        );
    }
}
