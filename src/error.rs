use crate::field::Field;
use std::fmt::Display;
use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// Expression doesn't consist of exactly five whitespace-separated fields.
    #[error("invalid cron expression: {0}")]
    InvalidExpression(String),
    /// One of the five fields is invalid.
    #[error("invalid {field} field '{value}': {reason}")]
    InvalidField {
        /// Field the rejected value belongs to.
        field: Field,
        /// Rejected field text.
        value: String,
        /// Why the value was rejected.
        reason: Reason,
    },
}

/// Reason of a field rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reason {
    /// Value doesn't match the base list/range/step grammar.
    Malformed,
    /// Numeric value (or resolved alias) is outside of the field's limits.
    OutOfRange,
    /// Name isn't a registered 3-letter alias.
    UnknownAlias,
    /// Extension token is recognized but its payload is malformed.
    MalformedExtensionToken,
    /// Extension token is combined with list/range/step syntax,
    /// or used at a field where it's never allowed.
    DisallowedCombination,
    /// Token belongs to an extension whose flag(s) are not enabled.
    DisabledFeature,
}

impl Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Reason::Malformed => "malformed value",
            Reason::OutOfRange => "value is out of the allowed range",
            Reason::UnknownAlias => "unknown alias",
            Reason::MalformedExtensionToken => "malformed extension token",
            Reason::DisallowedCombination => "combination is not allowed",
            Reason::DisabledFeature => "feature is not enabled",
        };
        write!(f, "{reason}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            Error::InvalidExpression("* * *".to_owned()).to_string(),
            "invalid cron expression: * * *"
        );
        assert_eq!(
            Error::InvalidField {
                field: Field::Minute,
                value: "60".to_owned(),
                reason: Reason::OutOfRange,
            }
            .to_string(),
            "invalid minutes field '60': value is out of the allowed range"
        );
        assert_eq!(
            Error::InvalidField {
                field: Field::DayOfWeek,
                value: "5L".to_owned(),
                reason: Reason::DisabledFeature,
            }
            .to_string(),
            "invalid days of week field '5L': feature is not enabled"
        );
    }
}
