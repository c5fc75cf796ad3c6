//! Predicate builder: compiles a `SearchParamRequest` onto a SeaORM `Select`.
//!
//! Criteria on different keys are ANDed, as are repeated criteria on one key, except
//! repeated `eq` values on a multi-valued field which collapse into a single `IN`.
//! Related entities are LEFT JOINed once per join path, and the query is made DISTINCT
//! as soon as any join is applied so one-to-many joins do not repeat root rows.

use sea_orm::{
    sea_query::Order, Condition, EntityTrait, JoinType, QueryFilter, QuerySelect, Select, Value,
};

use crate::server::{
    error::search::SearchError,
    search::{
        field::{Comparison, FieldKind, FieldRegistry, FilterField, Operator},
        policy::SortDirection,
        request::{Criterion, FilterValue, SearchParamRequest},
    },
};

/// Key every registry uses for the primary key; appended as a tiebreaker.
const TIEBREAK_KEY: &str = "id";

/// Applies the criteria, joins and ordering of `request` to `select`.
///
/// # Arguments
/// - `select` - Base query; may already carry scoping filters (e.g. one user's orders)
/// - `request` - Parsed request
/// - `registry` - Registry the request was parsed against
///
/// # Returns
/// - `Ok(Select<E>)` - Filtered and ordered query, not yet paginated
/// - `Err(SearchError)` - Operator not allowed on a field or value of the wrong type
pub fn build<E: EntityTrait>(
    mut select: Select<E>,
    request: &SearchParamRequest,
    registry: &FieldRegistry<E>,
) -> Result<Select<E>, SearchError> {
    let mut joined: Vec<&'static str> = Vec::new();
    let mut condition = Condition::all();
    let mut in_lists: Vec<(&FilterField<E>, Vec<Value>)> = Vec::new();

    for criterion in &request.criteria {
        let field = registry
            .resolve(criterion.key)
            .ok_or_else(|| SearchError::UnknownField(criterion.key.to_string()))?;

        check_criterion(field, criterion)?;

        if let Some(join) = field.join_path() {
            if !joined.contains(&join.name) {
                for relation in join.relations() {
                    select = select.join(JoinType::LeftJoin, relation);
                }
                joined.push(join.name);
            }
        }

        if field.is_multi_valued() && criterion.operator == Operator::Eq {
            let value = criterion.value.clone().into_value();
            match in_lists.iter_mut().find(|(f, _)| f.key() == field.key()) {
                Some((_, values)) => values.push(value),
                None => in_lists.push((field, vec![value])),
            }
            continue;
        }

        condition = condition.add(field.condition(comparison(criterion)));
    }

    for (field, values) in in_lists {
        condition = condition.add(field.condition(Comparison::In(values)));
    }

    select = select.filter(condition);
    if !joined.is_empty() {
        select = select.distinct();
    }

    let sort_field = registry
        .resolve(request.sort)
        .filter(|field| field.is_sortable())
        .ok_or_else(|| SearchError::UnsortableField(request.sort.to_string()))?;
    select = sort_field.order(select, sea_order(request.direction));

    if sort_field.key() != TIEBREAK_KEY {
        if let Some(id) = registry.resolve(TIEBREAK_KEY) {
            select = id.order(select, Order::Asc);
        }
    }

    Ok(select)
}

/// Rejects operators the field does not allow and values of the wrong type.
fn check_criterion<E: EntityTrait>(
    field: &FilterField<E>,
    criterion: &Criterion,
) -> Result<(), SearchError> {
    let unsupported = || SearchError::UnsupportedOperator {
        key: field.key().to_string(),
        operator: criterion.operator,
    };

    if criterion.operator.is_range() && !field.is_range() {
        return Err(unsupported());
    }
    if criterion.operator == Operator::Like && field.kind() != FieldKind::String {
        return Err(unsupported());
    }
    if !criterion.value.fits(field.kind()) {
        return Err(SearchError::TypeMismatch {
            key: field.key().to_string(),
            expected: field.kind(),
            got: criterion.value.type_name(),
        });
    }

    Ok(())
}

fn comparison(criterion: &Criterion) -> Comparison {
    let value = criterion.value.clone();
    match criterion.operator {
        Operator::Eq => Comparison::Eq(value.into_value()),
        Operator::Gt => Comparison::Gt(value.into_value()),
        Operator::Gte => Comparison::Gte(value.into_value()),
        Operator::Lt => Comparison::Lt(value.into_value()),
        Operator::Lte => Comparison::Lte(value.into_value()),
        Operator::Like => match value {
            FilterValue::Text(text) => Comparison::Like(like_contains(&text)),
            // check_criterion only lets text values through for like
            other => Comparison::Eq(other.into_value()),
        },
    }
}

fn sea_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}
