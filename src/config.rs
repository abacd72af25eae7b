use crate::{
    extension::{Flag, CAPABILITIES},
    field::{Field, FieldSpec, Limit},
};

/// Validation options: optional per-field limit overrides plus the flags
/// enabling the vendor extensions.
///
/// Everything defaults to off: [`Options::default()`] validates the classic
/// 5-field grammar with the standard limits and rejects every extension token
/// and alias.
///
/// With the `serde` feature enabled, `Options` deserializes from the camelCase
/// shape used by configuration files (`useLastDayOfMonth`, `daysOfMonth`,
/// `lowerLimit`, ...); unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    /// Limit override for the minutes field.
    pub minutes: Option<LimitOverride>,
    /// Limit override for the hours field.
    pub hours: Option<LimitOverride>,
    /// Limit override for the days of month field.
    pub days_of_month: Option<LimitOverride>,
    /// Limit override for the months field.
    pub months: Option<LimitOverride>,
    /// Limit override for the days of week field.
    pub days_of_week: Option<LimitOverride>,
    /// Allow `L` (optionally `L-<offset>`) at the days of month field.
    pub use_last_day_of_month: bool,
    /// Allow `<day>L` and bare `L` at the days of week field.
    pub use_last_day_of_week: bool,
    /// Allow `<day>W` at the days of month field.
    pub use_nearest_weekday: bool,
    /// Allow `<day>#<occurrence>` at the days of week field.
    pub use_nth_weekday_of_month: bool,
    /// Allow 3-letter name aliases at the months and days of week fields.
    pub use_aliases: bool,
}

/// Partial override of a single field's inclusive limits.
///
/// An absent side keeps the field's built-in default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LimitOverride {
    /// New lower limit, inclusive.
    pub lower_limit: Option<u16>,
    /// New upper limit, inclusive.
    pub upper_limit: Option<u16>,
}

impl Options {
    /// Resolves the options into the five effective field specifications.
    ///
    /// Never fails: absent overrides fall back to the built-in defaults, and
    /// each capability table row is attached only to the fields it names and
    /// only when all of its flags are enabled.
    pub(crate) fn resolve(&self) -> [FieldSpec; Field::COUNT] {
        Field::ALL.map(|field| {
            let default = field.default_limit();
            let limit_override = self.limit_override(field);
            let limit = Limit {
                lower: limit_override.and_then(|o| o.lower_limit).unwrap_or(default.lower),
                upper: limit_override.and_then(|o| o.upper_limit).unwrap_or(default.upper),
            };
            let extensions = CAPABILITIES
                .iter()
                .filter(|extension| {
                    extension.fields.contains(&field) && extension.flags.iter().all(|flag| self.flag(*flag))
                })
                .collect();

            FieldSpec {
                field,
                limit,
                aliases: self.use_aliases && field.alias_table().is_some(),
                extensions,
            }
        })
    }

    fn limit_override(&self, field: Field) -> Option<&LimitOverride> {
        match field {
            Field::Minute => self.minutes.as_ref(),
            Field::Hour => self.hours.as_ref(),
            Field::DayOfMonth => self.days_of_month.as_ref(),
            Field::Month => self.months.as_ref(),
            Field::DayOfWeek => self.days_of_week.as_ref(),
        }
    }

    fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::LastDayOfMonth => self.use_last_day_of_month,
            Flag::LastDayOfWeek => self.use_last_day_of_week,
            Flag::NearestWeekday => self.use_nearest_weekday,
            Flag::NthWeekdayOfMonth => self.use_nth_weekday_of_month,
        }
    }
}
