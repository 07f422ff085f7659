//! Line records of the street map format
//!
//! ```text
//! i <title> <latitude> <longitude>
//! r <name> <title1> <title2>
//! ```

use std::str::SplitWhitespace;

use crate::InputFormatError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Record<'a> {
    Intersection {
        title: &'a str,
        latitude: f64,
        longitude: f64,
    },
    Street {
        name: &'a str,
        from: &'a str,
        to: &'a str,
    },
}

/// Parses one line. Blank lines and `#` comments yield `None`.
pub(crate) fn parse_record(line: &str) -> Result<Option<Record<'_>>, InputFormatError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split_whitespace();
    let kind = next_field(&mut fields, "kind")?;
    let record = match kind {
        "i" => Record::Intersection {
            title: next_field(&mut fields, "title")?,
            latitude: parse_number(next_field(&mut fields, "latitude")?, "latitude")?,
            longitude: parse_number(next_field(&mut fields, "longitude")?, "longitude")?,
        },
        "r" => Record::Street {
            name: next_field(&mut fields, "name")?,
            from: next_field(&mut fields, "title1")?,
            to: next_field(&mut fields, "title2")?,
        },
        other => return Err(InputFormatError::UnknownRecord(other.to_string())),
    };

    if let Some(extra) = fields.next() {
        return Err(InputFormatError::TrailingField(extra.to_string()));
    }
    Ok(Some(record))
}

fn next_field<'a>(
    fields: &mut SplitWhitespace<'a>,
    name: &'static str,
) -> Result<&'a str, InputFormatError> {
    fields.next().ok_or(InputFormatError::MissingField(name))
}

fn parse_number(value: &str, field: &'static str) -> Result<f64, InputFormatError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| InputFormatError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
