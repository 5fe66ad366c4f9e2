//! Dotted-quad address validation.
//!
//! Addresses and masks are validated syntactically only: four `.`-separated
//! decimal segments, each between 0 and 255. The original text is kept so
//! that `show` output echoes exactly what the operator typed.

use std::fmt;

/// A syntactically valid dotted-quad (address or mask).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DottedQuad {
    text: String,
}

impl DottedQuad {
    /// Parses a dotted quad, returning `None` if it is malformed.
    pub fn parse(input: &str) -> Option<Self> {
        let mut segments = 0;
        for segment in input.split('.') {
            segments += 1;
            if segments > 4 {
                return None;
            }
            parse_octet(segment)?;
        }

        (segments == 4).then(|| Self {
            text: input.to_string(),
        })
    }

    /// Returns the address exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

fn parse_octet(segment: &str) -> Option<u8> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros are tolerated ("010" is 10); overlong values fail the parse.
    segment.parse::<u8>().ok()
}

impl fmt::Display for DottedQuad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
