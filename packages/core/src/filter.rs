//! Filters constrain which values the server returns.

use crate::modifier::Modifier;
use crate::{Error, FilterValue};

/// A query filter.
///
/// Filters are constructed through the associated functions, which reject
/// values the server could never accept. Once constructed, rendering cannot
/// fail.
#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    /// Match children equal to the value. `Null` matches absent children.
    EqualTo(FilterValue),
    /// Inclusive lower bound.
    StartAt(FilterValue),
    /// Inclusive upper bound.
    EndAt(FilterValue),
    /// Keep only the first `n` children of the ordered result.
    LimitToFirst(u32),
    /// Keep only the last `n` children of the ordered result.
    LimitToLast(u32),
    /// Return keys only, with nested values replaced by `true`.
    Shallow,
}

fn encodable(value: FilterValue) -> Result<FilterValue, Error> {
    if value.is_encodable() {
        Ok(value)
    } else {
        Err(Error::invalid_filter_value(format!(
            "{:?} has no JSON representation",
            value
        )))
    }
}

fn range_boundary(value: FilterValue) -> Result<FilterValue, Error> {
    if value.is_null() {
        return Err(Error::invalid_filter_value(
            "range boundary must not be absent",
        ));
    }
    encodable(value)
}

fn limit(n: u32) -> Result<u32, Error> {
    if n == 0 {
        return Err(Error::invalid_filter_value("limit must be at least 1"));
    }
    Ok(n)
}

impl Filter {
    pub fn equal_to(value: impl Into<FilterValue>) -> Result<Self, Error> {
        encodable(value.into()).map(Filter::EqualTo)
    }

    /// Fails when `value` is absent: a range boundary must be concrete.
    pub fn start_at(value: impl Into<FilterValue>) -> Result<Self, Error> {
        range_boundary(value.into()).map(Filter::StartAt)
    }

    /// Fails when `value` is absent: a range boundary must be concrete.
    pub fn end_at(value: impl Into<FilterValue>) -> Result<Self, Error> {
        range_boundary(value.into()).map(Filter::EndAt)
    }

    pub fn limit_to_first(n: u32) -> Result<Self, Error> {
        limit(n).map(Filter::LimitToFirst)
    }

    pub fn limit_to_last(n: u32) -> Result<Self, Error> {
        limit(n).map(Filter::LimitToLast)
    }

    pub fn shallow() -> Self {
        Filter::Shallow
    }
}

impl Modifier for Filter {
    fn parameter_name(&self) -> &'static str {
        match self {
            Filter::EqualTo(_) => "equalTo",
            Filter::StartAt(_) => "startAt",
            Filter::EndAt(_) => "endAt",
            Filter::LimitToFirst(_) => "limitToFirst",
            Filter::LimitToLast(_) => "limitToLast",
            Filter::Shallow => "shallow",
        }
    }

    fn parameter_value(&self) -> String {
        match self {
            Filter::EqualTo(v) | Filter::StartAt(v) | Filter::EndAt(v) => v.to_json_string(),
            Filter::LimitToFirst(n) | Filter::LimitToLast(n) => n.to_string(),
            Filter::Shallow => "true".to_string(),
        }
    }
}
