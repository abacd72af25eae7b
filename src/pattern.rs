use crate::{
    error::{Error, Reason},
    field::{FieldSpec, FieldValueType},
    utils, Result,
};
use std::fmt::Display;

/// Parsed content of a single field, validated against its [`FieldSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Pattern {
    item: PatternItem,
}

impl Pattern {
    /// Parses one field's text against its effective specification.
    ///
    /// Malformed or disallowed input never panics, it comes back as
    /// [`Error::InvalidField`] naming the field and the rejection reason.
    pub(crate) fn parse(spec: &FieldSpec, input: &str) -> Result<Self> {
        match Self::parse_field(spec, input) {
            Ok(item) => Ok(Self { item }),
            Err(reason) => Err(Error::InvalidField {
                field: spec.field,
                value: input.to_owned(),
                reason,
            }),
        }
    }

    fn parse_field(spec: &FieldSpec, input: &str) -> std::result::Result<PatternItem, Reason> {
        if input.is_empty() {
            return Err(Reason::Malformed);
        }

        let mut items = input
            .split(',')
            .map(|item| Self::parse_item(spec, item))
            .collect::<std::result::Result<Vec<_>, Reason>>()?;

        if items.len() > 1 {
            // extension tokens occupy a whole field, never a list slot
            if items.iter().any(PatternItem::is_extension) {
                return Err(Reason::DisallowedCombination);
            }
            Ok(PatternItem::List(items))
        } else {
            Ok(items.remove(0))
        }
    }

    fn parse_item(spec: &FieldSpec, item: &str) -> std::result::Result<PatternItem, Reason> {
        if item == "*" {
            return Ok(PatternItem::All);
        }

        // Extension rows active at this field claim their tokens before the
        // base grammar sees them, so `L-2` never reaches the range rule.
        for extension in &spec.extensions {
            if let Some(matched) = (extension.matcher)(item, spec) {
                return matched;
            }
        }

        match Self::parse_base(spec, item) {
            Err(reason @ (Reason::Malformed | Reason::UnknownAlias)) => {
                // the item may be an extension token that's disabled or misplaced
                Err(spec.disabled_extension_reason(item).unwrap_or(reason))
            }
            parsed => parsed,
        }
    }

    fn parse_base(spec: &FieldSpec, item: &str) -> std::result::Result<PatternItem, Reason> {
        if let Some((base, interval)) = item.split_once('/') {
            // interval is always a plain positive number, never an alias
            let interval = match utils::parse_digital_value(interval) {
                Some(value) if value > 0 => value,
                _ => return Err(Reason::Malformed),
            };

            if base == "*" {
                Ok(PatternItem::RepeatingValue(spec.limit.lower, interval))
            } else if let Some((start, end)) = base.split_once('-') {
                let (start, end) = Self::parse_range_bounds(spec, start, end)?;
                Ok(PatternItem::RepeatingRange(start, end, interval))
            } else {
                Ok(PatternItem::RepeatingValue(spec.parse_value(base)?, interval))
            }
        } else if let Some((start, end)) = item.split_once('-') {
            let (start, end) = Self::parse_range_bounds(spec, start, end)?;
            Ok(PatternItem::Range(start, end))
        } else {
            Ok(PatternItem::Particular(spec.parse_value(item)?))
        }
    }

    fn parse_range_bounds(
        spec: &FieldSpec,
        start: &str,
        end: &str,
    ) -> std::result::Result<(FieldValueType, FieldValueType), Reason> {
        let start = spec.parse_value(start)?;
        let end = spec.parse_value(end)?;
        if start > end {
            Err(Reason::OutOfRange)
        } else {
            Ok((start, end))
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.item)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternItem {
    All,
    Particular(FieldValueType),
    List(Vec<PatternItem>),
    // start-finish
    Range(FieldValueType, FieldValueType),
    // start/interval
    RepeatingValue(FieldValueType, FieldValueType),
    // start-finish/interval
    RepeatingRange(FieldValueType, FieldValueType, FieldValueType),
    // L with optional offset
    LastDom(Option<FieldValueType>),
    // weekday
    LastDow(FieldValueType),
    // day of month
    Weekday(FieldValueType),
    // LW
    LastWeekday,
    // weekday#nth
    Sharp(FieldValueType, FieldValueType),
}

impl PatternItem {
    fn is_extension(&self) -> bool {
        matches!(
            self,
            PatternItem::LastDom(_)
                | PatternItem::LastDow(_)
                | PatternItem::Weekday(_)
                | PatternItem::LastWeekday
                | PatternItem::Sharp(..)
        )
    }
}

impl Display for PatternItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternItem::All => write!(f, "*"),
            PatternItem::Particular(value) => write!(f, "{value}"),
            PatternItem::Range(start, end) => write!(f, "{start}-{end}"),
            PatternItem::RepeatingValue(start, interval) => write!(f, "{start}/{interval}"),
            PatternItem::RepeatingRange(start, end, interval) => write!(f, "{start}-{end}/{interval}"),
            PatternItem::LastDom(None) => write!(f, "L"),
            PatternItem::LastDom(Some(offset)) => write!(f, "L-{offset}"),
            PatternItem::LastDow(day) => write!(f, "{day}L"),
            PatternItem::Weekday(day) => write!(f, "{day}W"),
            PatternItem::LastWeekday => write!(f, "LW"),
            PatternItem::Sharp(day, nth) => write!(f, "{day}#{nth}"),
            PatternItem::List(items) => {
                let values = items.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
                write!(f, "{values}")
            }
        }
    }
}
