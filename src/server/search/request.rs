//! Request parser: raw query parameters into a validated `SearchParamRequest`.
//!
//! Reserved parameters (`sort`, `order`, `page`, `size`, `fold`) control ordering and
//! paging. Every other parameter is a filter criterion written as `[op:]key=value`,
//! where `key` must resolve in the resource's `FieldRegistry` and `op` defaults to `eq`.
//! A blank reserved parameter is treated as absent and takes the policy default.
//! Reserved values are trimmed; filter values are matched exactly as given.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, Value};

use crate::server::{
    error::search::SearchError,
    search::{
        field::{FieldKind, FieldRegistry, Operator},
        policy::{SearchPolicy, SortDirection, MAX_PAGE, MAX_SIZE},
    },
};

const SORT: &str = "sort";
const ORDER: &str = "order";
const PAGE: &str = "page";
const SIZE: &str = "size";
const FOLD: &str = "fold";

/// Typed criterion value, coerced from the raw query string.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterValue {
    Integer(i64),
    Text(String),
    Decimal(Decimal),
    DateTime(DateTime<Utc>),
}

impl FilterValue {
    /// Coerces a raw query value into the type of `kind`.
    ///
    /// Like-criteria keep the raw text for string fields; other kinds are still
    /// coerced so a malformed value is reported before the operator check.
    pub fn coerce(kind: FieldKind, key: &str, raw: &str) -> Result<Self, SearchError> {
        let invalid = || SearchError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: kind,
        };

        match kind {
            FieldKind::String => Ok(FilterValue::Text(raw.to_string())),
            FieldKind::Integer => raw
                .parse::<i64>()
                .map(FilterValue::Integer)
                .map_err(|_| invalid()),
            FieldKind::Decimal => Decimal::from_str(raw)
                .map(FilterValue::Decimal)
                .map_err(|_| invalid()),
            FieldKind::DateTime => parse_date_time(raw)
                .map(FilterValue::DateTime)
                .ok_or_else(invalid),
            FieldKind::Status => {
                let status = raw.to_ascii_uppercase();
                if status == entity::purchase::STATUS_ACTIVE
                    || status == entity::purchase::STATUS_EXPIRED
                {
                    Ok(FilterValue::Text(status))
                } else {
                    Err(invalid())
                }
            }
        }
    }

    /// Whether this value can be compared against a field of `kind`.
    pub fn fits(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FilterValue::Integer(_), FieldKind::Integer)
                | (FilterValue::Text(_), FieldKind::String | FieldKind::Status)
                | (FilterValue::Decimal(_), FieldKind::Decimal)
                | (FilterValue::DateTime(_), FieldKind::DateTime)
        )
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            FilterValue::Integer(_) => "integer",
            FilterValue::Text(_) => "text",
            FilterValue::Decimal(_) => "decimal",
            FilterValue::DateTime(_) => "date-time",
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            FilterValue::Integer(v) => v.into(),
            FilterValue::Text(v) => v.into(),
            FilterValue::Decimal(v) => v.into(),
            FilterValue::DateTime(v) => v.into(),
        }
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_date_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| date_time.and_utc())
}

/// Single filter criterion: `key <operator> value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Criterion {
    /// Canonical registry key the criterion resolved to.
    pub key: &'static str,
    pub operator: Operator,
    pub value: FilterValue,
}

/// Validated search request for one resource.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchParamRequest {
    /// Criteria in the order they appeared in the query string.
    pub criteria: Vec<Criterion>,
    pub sort: &'static str,
    pub direction: SortDirection,
    pub page: u64,
    pub size: u64,
    pub fold: bool,
}

impl SearchParamRequest {
    /// Request with no criteria that uses every policy default.
    pub fn from_policy(policy: SearchPolicy) -> Self {
        Self {
            criteria: Vec::new(),
            sort: policy.sort,
            direction: policy.direction,
            page: policy.page,
            size: policy.size,
            fold: policy.fold,
        }
    }

    /// Parses raw query parameters into a request.
    ///
    /// # Arguments
    /// - `params` - Query string pairs in their original order; keys may repeat
    /// - `registry` - Whitelist of filterable keys for the resource
    /// - `policy` - Defaults for absent reserved parameters
    ///
    /// # Returns
    /// - `Ok(SearchParamRequest)` - Every parameter was recognized and well-formed
    /// - `Err(SearchError)` - Unknown key or operator, malformed value, invalid paging
    pub fn parse<E: EntityTrait>(
        params: &[(String, String)],
        registry: &FieldRegistry<E>,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        let mut request = Self::from_policy(policy);
        let mut seen_reserved: Vec<&'static str> = Vec::new();

        for (param, raw) in params {
            if let Some(reserved) = reserved_name(param) {
                let raw = raw.trim();
                if seen_reserved.contains(&reserved) {
                    return Err(SearchError::DuplicateParameter(reserved.to_string()));
                }
                seen_reserved.push(reserved);

                if !raw.is_empty() {
                    request.apply_reserved(reserved, raw, registry)?;
                }
                continue;
            }

            let (operator, key) = split_operator(param)?;
            let field = registry
                .resolve(key)
                .ok_or_else(|| SearchError::UnknownField(key.to_string()))?;

            if raw.is_empty() {
                return Err(SearchError::EmptyValue(param.clone()));
            }

            request.criteria.push(Criterion {
                key: field.key(),
                operator,
                value: FilterValue::coerce(field.kind(), field.key(), raw)?,
            });
        }

        Ok(request)
    }

    fn apply_reserved<E: EntityTrait>(
        &mut self,
        name: &'static str,
        raw: &str,
        registry: &FieldRegistry<E>,
    ) -> Result<(), SearchError> {
        match name {
            SORT => {
                let field = registry
                    .resolve(raw)
                    .filter(|field| field.is_sortable())
                    .ok_or_else(|| SearchError::UnsortableField(raw.to_string()))?;
                self.sort = field.key();
            }
            ORDER => {
                self.direction = SortDirection::parse(raw)
                    .ok_or_else(|| SearchError::InvalidOrder(raw.to_string()))?;
            }
            PAGE => {
                self.page = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|page| *page <= MAX_PAGE)
                    .ok_or_else(|| SearchError::InvalidPage(raw.to_string()))?;
            }
            SIZE => {
                self.size = raw
                    .parse::<u64>()
                    .ok()
                    .filter(|size| (1..=MAX_SIZE).contains(size))
                    .ok_or_else(|| SearchError::InvalidSize(raw.to_string()))?;
            }
            FOLD => {
                self.fold = match raw.to_ascii_lowercase().as_str() {
                    "true" | "on" => true,
                    "false" | "off" => false,
                    _ => return Err(SearchError::InvalidFold(raw.to_string())),
                };
            }
            _ => unreachable!("reserved_name only yields reserved parameters"),
        }

        Ok(())
    }
}

fn reserved_name(param: &str) -> Option<&'static str> {
    [SORT, ORDER, PAGE, SIZE, FOLD]
        .into_iter()
        .find(|name| param.eq_ignore_ascii_case(name))
}

/// Splits `op:key` into its operator and key; a bare key means `eq`.
fn split_operator(param: &str) -> Result<(Operator, &str), SearchError> {
    match param.split_once(':') {
        None => Ok((Operator::Eq, param)),
        Some((prefix, key)) => {
            let operator =
                Operator::from_prefix(prefix).ok_or_else(|| SearchError::UnknownOperator {
                    param: param.to_string(),
                    operator: prefix.to_string(),
                })?;
            Ok((operator, key))
        }
    }
}
