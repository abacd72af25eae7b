//! Declarative capability table of the vendor extensions.
//!
//! Each row describes one extension token: the configuration flag(s) gating
//! it, the fields where it may legally appear and its micro-grammar matcher.
//! The parser walks the rows active for a field instead of branching on the
//! field itself, so adding an extension means adding a row here.
use crate::{
    error::Reason,
    field::{Field, FieldSpec},
    pattern::PatternItem,
    utils,
};

/// Identity of an extension token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExtensionKind {
    LastDayOfMonth,
    LastWeekdayOccurrence,
    NearestWeekday,
    LastWeekdayOfMonth,
    NthWeekdayOfMonth,
}

/// Configuration flag gating one or more extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flag {
    LastDayOfMonth,
    LastDayOfWeek,
    NearestWeekday,
    NthWeekdayOfMonth,
}

/// Micro-grammar matcher of a single extension.
///
/// Returns `None` if the token doesn't have the extension's shape at all,
/// `Some(Ok(_))` on a full match and `Some(Err(_))` if the shape matches but
/// the payload is malformed or out of the field's limits.
type Matcher = fn(&str, &FieldSpec) -> Option<Result<PatternItem, Reason>>;

/// Single row of the capability table.
#[derive(Debug)]
pub(crate) struct Extension {
    pub(crate) kind: ExtensionKind,
    pub(crate) flags: &'static [Flag],
    pub(crate) fields: &'static [Field],
    pub(crate) matcher: Matcher,
}

/// The whole capability table.
///
/// `LW` is listed before the plain `W` rule: both flags enabled, the compound
/// token must be claimed by its own row, not rejected as a malformed `<day>W`.
pub(crate) static CAPABILITIES: [Extension; 5] = [
    Extension {
        kind: ExtensionKind::LastWeekdayOfMonth,
        flags: &[Flag::LastDayOfMonth, Flag::NearestWeekday],
        fields: &[Field::DayOfMonth],
        matcher: match_last_weekday_of_month,
    },
    Extension {
        kind: ExtensionKind::LastDayOfMonth,
        flags: &[Flag::LastDayOfMonth],
        fields: &[Field::DayOfMonth],
        matcher: match_last_day_of_month,
    },
    Extension {
        kind: ExtensionKind::NearestWeekday,
        flags: &[Flag::NearestWeekday],
        fields: &[Field::DayOfMonth],
        matcher: match_nearest_weekday,
    },
    Extension {
        kind: ExtensionKind::LastWeekdayOccurrence,
        flags: &[Flag::LastDayOfWeek],
        fields: &[Field::DayOfWeek],
        matcher: match_last_weekday_occurrence,
    },
    Extension {
        kind: ExtensionKind::NthWeekdayOfMonth,
        flags: &[Flag::NthWeekdayOfMonth],
        fields: &[Field::DayOfWeek],
        matcher: match_nth_weekday,
    },
];

/// Exactly `LW`, no day prefix, no reversed `WL`.
fn match_last_weekday_of_month(token: &str, _spec: &FieldSpec) -> Option<Result<PatternItem, Reason>> {
    if token == "LW" {
        Some(Ok(PatternItem::LastWeekday))
    } else {
        None
    }
}

/// `L` or `L-<offset>`, offset checked against the field's limits.
fn match_last_day_of_month(token: &str, spec: &FieldSpec) -> Option<Result<PatternItem, Reason>> {
    if token == "L" {
        Some(Ok(PatternItem::LastDom(None)))
    } else if let Some(offset) = token.strip_prefix("L-") {
        Some(match utils::parse_digital_value(offset) {
            Some(value) if spec.limit.contains(value) => Ok(PatternItem::LastDom(Some(value))),
            Some(_) => Err(Reason::OutOfRange),
            None => Err(Reason::MalformedExtensionToken),
        })
    } else {
        None
    }
}

/// `<day>W`, the day is mandatory.
fn match_nearest_weekday(token: &str, spec: &FieldSpec) -> Option<Result<PatternItem, Reason>> {
    let day = token.strip_suffix('W')?;
    Some(match utils::parse_digital_value(day) {
        Some(value) if spec.limit.contains(value) => Ok(PatternItem::Weekday(value)),
        Some(_) => Err(Reason::OutOfRange),
        None => Err(Reason::MalformedExtensionToken),
    })
}

/// `<day>L`, or bare `L` meaning the last day the field's limits allow.
fn match_last_weekday_occurrence(token: &str, spec: &FieldSpec) -> Option<Result<PatternItem, Reason>> {
    if token == "L" {
        return Some(Ok(PatternItem::LastDow(spec.limit.upper)));
    }
    let day = token.strip_suffix('L')?;
    Some(match utils::parse_digital_value(day) {
        Some(value) if spec.limit.contains(value) => Ok(PatternItem::LastDow(value)),
        Some(_) => Err(Reason::OutOfRange),
        None => Err(Reason::MalformedExtensionToken),
    })
}

/// `<day>#<occurrence>`, both parts mandatory, occurrence is any number.
fn match_nth_weekday(token: &str, spec: &FieldSpec) -> Option<Result<PatternItem, Reason>> {
    let (day, nth) = token.split_once('#')?;
    Some(match (utils::parse_digital_value(day), utils::parse_digital_value(nth)) {
        (Some(day), Some(nth)) if spec.limit.contains(day) => Ok(PatternItem::Sharp(day, nth)),
        (Some(_), Some(_)) => Err(Reason::OutOfRange),
        _ => Err(Reason::MalformedExtensionToken),
    })
}
