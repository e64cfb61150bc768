//! Typed call arguments.

use crate::Operation;
use opendart_error::ParamError;
use std::collections::BTreeMap;

/// A named call argument. The string form is the wire query key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Param {
    /// Corporation code (8 digits)
    CorpCode,
    /// Business year (YYYY)
    BsnsYear,
    /// Report code
    ReprtCode,
    /// Range start (YYYYMMDD)
    BgnDe,
    /// Range end (YYYYMMDD)
    EndDe,
    /// Consolidated or separate
    FsDiv,
    /// Statement division
    SjDiv,
    /// Receipt number
    RceptNo,
    /// Final reports only (Y/N)
    LastReprtAt,
    /// Disclosure type
    PblntfTy,
    /// Disclosure detail type
    PblntfDetailTy,
    /// Market classification
    CorpCls,
    /// Page number
    PageNo,
    /// Page size
    PageCount,
}

/// Argument map passed to [`DartApi::invoke`](crate::DartApi::invoke).
///
/// Iteration order is stable, which keeps query strings deterministic.
///
/// # Examples
///
/// ```
/// use opendart_interface::{Operation, Param, Params};
///
/// let params = Params::new()
///     .with(Param::CorpCode, "00126380")
///     .with(Param::BsnsYear, "2023");
///
/// assert_eq!(params.get(Param::CorpCode), Some("00126380"));
/// assert!(params.require(Param::ReprtCode, Operation::ReportGetDividends).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<Param, String>);

impl Params {
    /// Empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, param: Param, value: impl Into<String>) -> Self {
        self.insert(param, value);
        self
    }

    /// Insert or replace an argument.
    pub fn insert(&mut self, param: Param, value: impl Into<String>) {
        self.0.insert(param, value.into());
    }

    /// Look up an argument.
    pub fn get(&self, param: Param) -> Option<&str> {
        self.0.get(&param).map(String::as_str)
    }

    /// Look up an argument the operation cannot do without.
    #[track_caller]
    pub fn require(&self, param: Param, operation: Operation) -> Result<&str, ParamError> {
        self.get(param)
            .ok_or_else(|| ParamError::missing(param.as_ref(), operation.as_ref()))
    }

    /// Check every argument `operation` requires is present.
    #[track_caller]
    pub fn validate(&self, operation: Operation) -> Result<(), ParamError> {
        for param in operation.required_params() {
            self.require(*param, operation)?;
        }
        Ok(())
    }

    /// Arguments as `(query key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no argument is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Param, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (Param, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
