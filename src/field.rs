use crate::{
    error::Reason,
    extension::{Extension, CAPABILITIES},
    utils,
};
use std::fmt::Display;

pub(crate) type FieldValueType = u16;

/// One of the five positions of a cron expression, in the fixed order
/// they appear in the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Minutes field (index 0).
    Minute,
    /// Hours field (index 1).
    Hour,
    /// Days of month field (index 2).
    DayOfMonth,
    /// Months field (index 3).
    Month,
    /// Days of week field (index 4).
    DayOfWeek,
}

impl Field {
    pub(crate) const COUNT: usize = 5;
    pub(crate) const ALL: [Self; Self::COUNT] =
        [Self::Minute, Self::Hour, Self::DayOfMonth, Self::Month, Self::DayOfWeek];

    const DAYS_OF_WEEK: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];
    const MONTHS: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];

    pub(crate) fn default_limit(&self) -> Limit {
        match self {
            Self::Minute => Limit { lower: 0, upper: 59 },
            Self::Hour => Limit { lower: 0, upper: 23 },
            Self::DayOfMonth => Limit { lower: 1, upper: 31 },
            Self::Month => Limit { lower: 1, upper: 12 },
            Self::DayOfWeek => Limit { lower: 0, upper: 6 },
        }
    }

    /// Alias table and numeric value of its first entry,
    /// for the two fields which have names.
    pub(crate) fn alias_table(&self) -> Option<(&'static [&'static str], FieldValueType)> {
        match self {
            Self::Month => Some((&Self::MONTHS, 1)),
            Self::DayOfWeek => Some((&Self::DAYS_OF_WEEK, 0)),
            _ => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Minute => "minutes",
            Field::Hour => "hours",
            Field::DayOfMonth => "days of month",
            Field::Month => "months",
            Field::DayOfWeek => "days of week",
        };
        write!(f, "{name}")
    }
}

/// Inclusive bounds every plain numeric atom of a field must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Limit {
    pub(crate) lower: FieldValueType,
    pub(crate) upper: FieldValueType,
}

impl Limit {
    pub(crate) fn contains(&self, value: FieldValueType) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Effective specification of a single field: resolved limits, alias state and
/// the extensions usable at this position under the current flags.
///
/// Produced by [`Options::resolve`](crate::Options) and immutable afterwards.
#[derive(Debug, Clone)]
pub(crate) struct FieldSpec {
    pub(crate) field: Field,
    pub(crate) limit: Limit,
    pub(crate) aliases: bool,
    pub(crate) extensions: Vec<&'static Extension>,
}

impl FieldSpec {
    /// Resolves a plain atom (number or alias) against the field's limits.
    pub(crate) fn parse_value(&self, input: &str) -> Result<FieldValueType, Reason> {
        if let Some(value) = utils::parse_digital_value(input) {
            return if self.limit.contains(value) {
                Ok(value)
            } else {
                Err(Reason::OutOfRange)
            };
        }

        if self.aliases {
            if let Some((table, shift)) = self.field.alias_table() {
                return match utils::parse_alias_value(input, table) {
                    Some(position) => {
                        let value = position + shift;
                        if self.limit.contains(value) {
                            Ok(value)
                        } else {
                            Err(Reason::OutOfRange)
                        }
                    }
                    None => Err(Reason::UnknownAlias),
                };
            }
        }

        Err(Reason::Malformed)
    }

    /// Explains why an unparsable item might have been rejected: if its shape
    /// matches an extension that's inactive here, report whether the flag is
    /// off or the field is wrong.
    pub(crate) fn disabled_extension_reason(&self, item: &str) -> Option<Reason> {
        CAPABILITIES
            .iter()
            .filter(|extension| !self.extensions.iter().any(|active| active.kind == extension.kind))
            .find_map(|extension| {
                (extension.matcher)(item, self).map(|_| {
                    if extension.fields.contains(&self.field) {
                        Reason::DisabledFeature
                    } else {
                        Reason::DisallowedCombination
                    }
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn spec(field: Field, aliases: bool) -> FieldSpec {
        FieldSpec {
            field,
            limit: field.default_limit(),
            aliases,
            extensions: vec![],
        }
    }

    #[rstest]
    #[case(Field::Minute, 0, 59)]
    #[case(Field::Hour, 0, 23)]
    #[case(Field::DayOfMonth, 1, 31)]
    #[case(Field::Month, 1, 12)]
    #[case(Field::DayOfWeek, 0, 6)]
    fn default_limits(#[case] field: Field, #[case] lower: FieldValueType, #[case] upper: FieldValueType) {
        assert_eq!(field.default_limit(), Limit { lower, upper });
    }

    #[test]
    fn alias_tables() {
        assert!(Field::Minute.alias_table().is_none());
        assert!(Field::Hour.alias_table().is_none());
        assert!(Field::DayOfMonth.alias_table().is_none());

        let (months, shift) = Field::Month.alias_table().unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(shift, 1);

        let (dows, shift) = Field::DayOfWeek.alias_table().unwrap();
        assert_eq!(dows.len(), 7);
        assert_eq!(shift, 0);
    }

    #[rstest]
    #[case(Field::Minute, false, "0", Ok(0))]
    #[case(Field::Minute, false, "59", Ok(59))]
    #[case(Field::Minute, false, "60", Err(Reason::OutOfRange))]
    #[case(Field::Month, false, "0", Err(Reason::OutOfRange))]
    #[case(Field::Month, false, "13", Err(Reason::OutOfRange))]
    #[case(Field::Month, false, "jan", Err(Reason::Malformed))]
    #[case(Field::Month, true, "jan", Ok(1))]
    #[case(Field::Month, true, "DEC", Ok(12))]
    #[case(Field::Month, true, "MaR", Ok(3))]
    #[case(Field::Month, true, "january", Err(Reason::UnknownAlias))]
    #[case(Field::Month, true, "j@n", Err(Reason::UnknownAlias))]
    #[case(Field::DayOfWeek, true, "sun", Ok(0))]
    #[case(Field::DayOfWeek, true, "SAT", Ok(6))]
    #[case(Field::DayOfWeek, true, "7", Err(Reason::OutOfRange))]
    #[case(Field::DayOfWeek, true, "mon-", Err(Reason::UnknownAlias))]
    #[case(Field::Hour, true, "jan", Err(Reason::Malformed))]
    #[case(Field::Hour, false, "", Err(Reason::Malformed))]
    #[case(Field::Hour, false, "-1", Err(Reason::Malformed))]
    #[case(Field::Hour, false, "1.5", Err(Reason::Malformed))]
    fn parse_value(
        #[case] field: Field,
        #[case] aliases: bool,
        #[case] input: &str,
        #[case] expected: Result<FieldValueType, Reason>,
    ) {
        assert_eq!(spec(field, aliases).parse_value(input), expected, "input = {input}");
    }

    #[test]
    fn resolved_alias_respects_overridden_limit() {
        // sun == 0 is out of range when the lower limit is raised
        let spec = FieldSpec {
            field: Field::DayOfWeek,
            limit: Limit { lower: 1, upper: 7 },
            aliases: true,
            extensions: vec![],
        };
        assert_eq!(spec.parse_value("sun"), Err(Reason::OutOfRange));
        assert_eq!(spec.parse_value("mon"), Ok(1));
    }
}
