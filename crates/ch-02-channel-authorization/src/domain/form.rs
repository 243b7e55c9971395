//! # Form Body
//!
//! Strict `application/x-www-form-urlencoded` decoding. A malformed percent
//! escape, a `;` separator or bytes that are not UTF-8 are an error rather
//! than being passed through.

use shared_types::ParseError;
use std::collections::HashMap;
use url::form_urlencoded;

/// Decoded form fields. Repeated names keep every value in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(HashMap<String, Vec<String>>);

impl FormFields {
    /// Decode a request body.
    pub fn parse(body: &[u8]) -> Result<Self, ParseError> {
        check_strict(body)?;

        let mut fields: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in form_urlencoded::parse(body) {
            // The decoder substitutes U+FFFD for bytes that are not UTF-8.
            if name.contains(char::REPLACEMENT_CHARACTER)
                || value.contains(char::REPLACEMENT_CHARACTER)
            {
                return Err(ParseError::RequestBody("body is not valid UTF-8".to_string()));
            }
            fields.entry(name.into_owned()).or_default().push(value.into_owned());
        }

        Ok(Self(fields))
    }

    /// First value of `name`, if present.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Reject what the lenient decoder would pass through unchanged.
fn check_strict(body: &[u8]) -> Result<(), ParseError> {
    if body.contains(&b';') {
        return Err(ParseError::RequestBody("invalid semicolon separator".to_string()));
    }

    let mut offset = 0;
    while let Some(idx) = body[offset..].iter().position(|b| *b == b'%') {
        let at = offset + idx;
        let valid = body
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(ParseError::RequestBody(format!("invalid percent escape at byte {at}")));
        }
        offset = at + 3;
    }
    Ok(())
}
