#![deny(unsafe_code)]

use std::fmt;

/// How the missing-value stage treats sentinel/absent values.
///
/// `Passthrough` is the deliberate permissive fallback: an unrecognized
/// strategy name leaves the table untouched instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingStrategy {
    Drop,
    #[default]
    Impute,
    Flag,
    Passthrough,
}

impl MissingStrategy {
    /// Parse a strategy name. Unknown names map to `Passthrough` rather than
    /// an error; callers that want strictness should match on the result.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "drop" => MissingStrategy::Drop,
            "impute" => MissingStrategy::Impute,
            "flag" => MissingStrategy::Flag,
            _ => MissingStrategy::Passthrough,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MissingStrategy::Drop => "drop",
            MissingStrategy::Impute => "impute",
            MissingStrategy::Flag => "flag",
            MissingStrategy::Passthrough => "passthrough",
        }
    }
}

impl fmt::Display for MissingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_parse() {
        assert_eq!(MissingStrategy::from_name("drop"), MissingStrategy::Drop);
        assert_eq!(MissingStrategy::from_name("IMPUTE"), MissingStrategy::Impute);
        assert_eq!(MissingStrategy::from_name(" flag "), MissingStrategy::Flag);
    }

    #[test]
    fn unknown_names_fall_through_to_passthrough() {
        assert_eq!(
            MissingStrategy::from_name("interpolate"),
            MissingStrategy::Passthrough
        );
        assert_eq!(MissingStrategy::from_name(""), MissingStrategy::Passthrough);
    }
}
