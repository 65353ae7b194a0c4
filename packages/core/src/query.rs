//! Composing filters and sorters into a request.

use std::collections::HashSet;

use serde_json::Value as JsonValue;
use url::Url;

use crate::modifier::Modifier;
use crate::{Error, Filter, FilterValue, Reference, Snapshot, Sorter};

/// Either kind of query modifier.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryModifier {
    Filter(Filter),
    Sorter(Sorter),
}

impl From<Filter> for QueryModifier {
    fn from(filter: Filter) -> Self {
        QueryModifier::Filter(filter)
    }
}

impl From<Sorter> for QueryModifier {
    fn from(sorter: Sorter) -> Self {
        QueryModifier::Sorter(sorter)
    }
}

impl Modifier for QueryModifier {
    fn parameter_name(&self) -> &'static str {
        match self {
            QueryModifier::Filter(f) => f.parameter_name(),
            QueryModifier::Sorter(s) => s.parameter_name(),
        }
    }

    fn parameter_value(&self) -> String {
        match self {
            QueryModifier::Filter(f) => f.parameter_value(),
            QueryModifier::Sorter(s) => s.parameter_value(),
        }
    }

    fn modify_value(&self, value: JsonValue) -> JsonValue {
        match self {
            QueryModifier::Filter(f) => f.modify_value(value),
            QueryModifier::Sorter(s) => s.modify_value(value),
        }
    }
}

/// Fail if two modifiers render the same parameter.
///
/// Only same-parameter duplicates are rejected here. Whether different
/// parameters combine (say `equalTo` with `startAt`) is decided by the server.
fn ensure_distinct(modifiers: &[QueryModifier]) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for modifier in modifiers {
        let parameter = modifier.parameter_name();
        if !seen.insert(parameter) {
            return Err(Error::ConflictingModifier { parameter });
        }
    }
    Ok(())
}

/// Render `modifiers` onto a copy of `uri`, in the order given.
pub fn attach(uri: &Url, modifiers: &[QueryModifier]) -> Result<Url, Error> {
    ensure_distinct(modifiers)?;
    Ok(modifiers
        .iter()
        .fold(uri.clone(), |uri, modifier| modifier.modify_uri(&uri)))
}

/// Apply each modifier's post-processing to a raw result, in the order given.
///
/// Only sorters change the value; filters were already applied by the server.
pub fn post_process(value: JsonValue, modifiers: &[QueryModifier]) -> JsonValue {
    modifiers
        .iter()
        .fold(value, |value, modifier| modifier.modify_value(value))
}

/// A query against one location.
///
/// ```rust,ignore
/// let uri = reference
///     .query()
///     .order_by_child("height")?
///     .start_at(3)?
///     .limit_to_first(10)?
///     .uri()?;
/// ```
#[derive(Clone, Debug)]
pub struct Query<R> {
    reference: R,
    modifiers: Vec<QueryModifier>,
}

impl<R: Reference> Query<R> {
    pub fn new(reference: R) -> Self {
        Query {
            reference,
            modifiers: Vec::new(),
        }
    }

    pub fn reference(&self) -> &R {
        &self.reference
    }

    pub fn modifiers(&self) -> &[QueryModifier] {
        &self.modifiers
    }

    /// Add a modifier, failing if its parameter is already set.
    pub fn modify(mut self, modifier: impl Into<QueryModifier>) -> Result<Self, Error> {
        let modifier = modifier.into();
        let parameter = modifier.parameter_name();
        if self
            .modifiers
            .iter()
            .any(|m| m.parameter_name() == parameter)
        {
            return Err(Error::ConflictingModifier { parameter });
        }
        self.modifiers.push(modifier);
        Ok(self)
    }

    pub fn order_by_key(self) -> Result<Self, Error> {
        self.modify(Sorter::order_by_key())
    }

    pub fn order_by_value(self) -> Result<Self, Error> {
        self.modify(Sorter::order_by_value())
    }

    pub fn order_by_child(self, child: &str) -> Result<Self, Error> {
        self.modify(Sorter::order_by_child(child)?)
    }

    pub fn equal_to(self, value: impl Into<FilterValue>) -> Result<Self, Error> {
        self.modify(Filter::equal_to(value)?)
    }

    pub fn start_at(self, value: impl Into<FilterValue>) -> Result<Self, Error> {
        self.modify(Filter::start_at(value)?)
    }

    pub fn end_at(self, value: impl Into<FilterValue>) -> Result<Self, Error> {
        self.modify(Filter::end_at(value)?)
    }

    pub fn limit_to_first(self, n: u32) -> Result<Self, Error> {
        self.modify(Filter::limit_to_first(n)?)
    }

    pub fn limit_to_last(self, n: u32) -> Result<Self, Error> {
        self.modify(Filter::limit_to_last(n)?)
    }

    pub fn shallow(self) -> Result<Self, Error> {
        self.modify(Filter::shallow())
    }

    /// The request URI: the reference's URI with every modifier attached.
    ///
    /// The reference path is validated first, so a structurally invalid
    /// location never reaches a transport.
    pub fn uri(&self) -> Result<Url, Error> {
        self.reference.path().validate()?;
        let uri = attach(&self.reference.uri(), &self.modifiers)?;
        tracing::debug!(uri = %uri, "rendered query");
        Ok(uri)
    }

    /// Wrap a raw result for this query, in the order its sorter requested.
    pub fn snapshot(&self, raw: JsonValue) -> Snapshot<R> {
        Snapshot::new(self.reference.clone(), post_process(raw, &self.modifiers))
    }
}
