use crate::{
    config::Options,
    error::Error,
    field::{Field, FieldSpec},
    pattern::Pattern,
    Result,
};

/// Validator of 5-field cron expressions with a resolved configuration.
///
/// Construction resolves the [`Options`] into the five effective field
/// specifications; the validator itself is immutable and may be reused (and
/// shared between threads) for any number of expressions.
///
/// ```rust
/// use cron_valid::{Options, Validator};
///
/// let validator = Validator::new(&Options {
///     use_last_day_of_month: true,
///     ..Default::default()
/// });
///
/// assert!(validator.validate("0 12 L * *"));
/// assert!(!validator.validate("0 12 * * L"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    specs: [FieldSpec; Field::COUNT],
}

impl Validator {
    /// Resolves `options` into an immutable validator.
    ///
    /// Never fails: absent overrides and flags fall back to the defaults.
    pub fn new(options: &Options) -> Self {
        Self {
            specs: options.resolve(),
        }
    }

    /// Validates an expression, reporting which field was rejected and why.
    ///
    /// The expression must consist of exactly five whitespace-separated
    /// fields in the order: minutes, hours, days of month, months, days of
    /// week. Ill-formed input is never fatal, it comes back as an [`Error`].
    pub fn check(&self, expression: &str) -> Result<()> {
        let fields: Vec<&str> = expression.split_whitespace().collect();
        if fields.len() != Field::COUNT {
            return Err(Error::InvalidExpression(expression.to_owned()));
        }

        for (spec, value) in self.specs.iter().zip(fields) {
            Pattern::parse(spec, value)?;
        }

        Ok(())
    }

    /// Boolean form of [`check`](Self::check).
    #[inline]
    pub fn validate(&self, expression: &str) -> bool {
        self.check(expression).is_ok()
    }
}

/// Validates a single cron expression under the provided options.
///
/// Resolves the configuration on every call; to validate many expressions
/// under the same options, construct a [`Validator`] once instead.
///
/// ```rust
/// use cron_valid::{validate, Options};
///
/// assert!(validate("*/15 0-8 1,15 * 1-5", &Options::default()));
/// assert!(!validate("* * * * L", &Options::default()));
/// ```
pub fn validate(expression: &str, options: &Options) -> bool {
    Validator::new(options).check(expression).is_ok()
}
