//! Configurable cron expression validator.
#![deny(unsafe_code, warnings, missing_docs)]

//! This is a tiny crate, intended to answer a single question: is this
//! 5-field cron expression legal under a given configuration? It computes no
//! timestamps and runs no jobs, it only accepts or rejects.
//!
//! An expression consists of five whitespace-separated fields: minutes,
//! hours, days of month, months and days of week. Every field supports the
//! base grammar, and each of the vendor extensions below is gated by its own
//! configuration flag and tied to a fixed field:
//!
//! | Field        | Default limits | Base syntax | Extensions (flagged)          |
//! |--------------|----------------|-------------|-------------------------------|
//! | Minutes      | 0-59           | `* , - /`   |                               |
//! | Hours        | 0-23           | `* , - /`   |                               |
//! | Day of month | 1-31           | `* , - /`   | `L`, `L-3`, `15W`, `LW`       |
//! | Month        | 1-12           | `* , - /`   | `JAN`-`DEC` aliases           |
//! | Day of week  | 0-6            | `* , - /`   | `5L`, `L`, `6#3`, `SUN`-`SAT` |
//!
//! Base patterns:
//! - `*` - any value;
//! - `,` - list of items, i.e. `1,7,12`;
//! - `-` - inclusive range, i.e. `0-15`;
//! - `/` - step, i.e. `*/12`, `10/5`, `30-59/2`; the interval is always a
//!   plain number.
//!
//! Extension tokens:
//! - `L` at days of month - last day of the month, optionally with an offset
//!   (`L-3`); requires [`use_last_day_of_month`](Options::use_last_day_of_month);
//! - `<day>L` (or bare `L`) at days of week - last such weekday of the month;
//!   requires [`use_last_day_of_week`](Options::use_last_day_of_week);
//! - `<day>W` at days of month - nearest weekday to the given day; requires
//!   [`use_nearest_weekday`](Options::use_nearest_weekday);
//! - `LW` at days of month - last weekday of the month; requires both
//!   `use_last_day_of_month` and `use_nearest_weekday`;
//! - `<day>#<n>` at days of week - n-th such weekday of the month; requires
//!   [`use_nth_weekday_of_month`](Options::use_nth_weekday_of_month);
//! - 3-letter month and weekday names, case-insensitive - require
//!   [`use_aliases`](Options::use_aliases).
//!
//! An extension token always occupies a whole field: it can't be a list item,
//! a range bound or a step operand. Per-field numeric limits may be tightened
//! or widened via [`Options`]; plain atoms, range bounds, step bases and
//! extension payloads are all checked against the effective limits.
//!
//! ## How to use
//!
//! One-shot validation goes through [`validate`]:
//!
//! ```rust
//! use cron_valid::{validate, Options};
//!
//! let options = Options {
//!     use_last_day_of_month: true,
//!     use_aliases: true,
//!     ..Default::default()
//! };
//!
//! assert!(validate("0 12 L * *", &options));
//! assert!(validate("30 6 * jan-jun/2 *", &options));
//!
//! // nothing is enabled by default
//! assert!(!validate("0 12 L * *", &Options::default()));
//! ```
//!
//! [`Validator`] resolves the configuration once and reports diagnostics:
//!
//! ```rust
//! use cron_valid::{Options, Result, Validator};
//!
//! fn check() -> Result<()> {
//!     let validator = Validator::new(&Options::default());
//!
//!     validator.check("*/5 9-17 * * 1-5")?;
//!
//!     let error = validator.check("*/5 9-17 * * 1-8").unwrap_err();
//!     assert_eq!(
//!         error.to_string(),
//!         "invalid days of week field '1-8': value is out of the allowed range"
//!     );
//!
//!     Ok(())
//! }
//! # check().unwrap();
//! ```
//!
//! # Feature flags
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html)
//!   and [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html)
//!   trait implementations for [`Options`], using the camelCase key names
//!   (`useLastDayOfMonth`, `daysOfMonth`, `lowerLimit`, ...).

mod config;
/// Crate specific Error implementation.
pub mod error;
mod extension;
mod field;
mod pattern;
mod utils;
/// Cron expression validator and its configuration resolution.
pub mod validator;

// Re-export of public entities.
pub use config::{LimitOverride, Options};
pub use error::{Error, Reason};
pub use field::Field;
pub use validator::{validate, Validator};

/// Convenient alias for `Result`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
