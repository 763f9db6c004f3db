//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret for `Debug` output.
///
/// - Empty input renders as `EMPTY`.
/// - Input shorter than 12 characters is fully masked.
/// - Longer input keeps its first and last three characters so different
///   tokens stay distinguishable in logs.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 || !self.0.is_char_boundary(3) || !self.0.is_char_boundary(length - 3)
        {
            f.write_str("***")
        } else {
            f.write_str(&self.0[..3])?;
            f.write_str("***")?;
            f.write_str(&self.0[length - 3..])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", "EMPTY"; "empty")]
    #[test_case("cs", "***"; "short secret")]
    #[test_case("xvz1evFS4wE", "***"; "eleven chars")]
    #[test_case("xvz1evFS4wEEPTGEFPHBog", "xvz***Bog"; "consumer key")]
    #[test_case("aトークンひみつ", "***"; "multibyte boundary")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact::from(input)), expected);
    }

    #[test]
    fn test_redact_option() {
        let none: Option<String> = None;
        assert_eq!(format!("{:?}", Redact::from(&none)), "EMPTY");
    }
}
