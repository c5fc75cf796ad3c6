//! Filterable field descriptors and the per-entity field registry.
//!
//! A `FieldRegistry` is the whitelist of query keys a search endpoint accepts. Each key
//! maps to a column (possibly on a joined entity), the value type used to coerce raw
//! query values, and the operators the column supports. Registries are written out as
//! static tables in `search::registry` and never change after they are first built.

use std::{collections::HashMap, fmt, sync::Arc};

use sea_orm::{
    sea_query::{LikeExpr, Order},
    ColumnTrait, Condition, EntityTrait, QueryOrder, RelationDef, Select, Value,
};

/// Value type of a filterable field, used to coerce raw query values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    String,
    Decimal,
    DateTime,
    /// Purchase status, stored as an upper-case string.
    Status,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Integer => "integer",
            FieldKind::String => "string",
            FieldKind::Decimal => "decimal",
            FieldKind::DateTime => "date-time",
            FieldKind::Status => "status (ACTIVE or EXPIRED)",
        };
        f.write_str(name)
    }
}

/// Comparison operator of a single filter criterion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Like,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Operator {
    /// Parses the operator prefix of a query key (`gte:price`).
    ///
    /// `f` and `p` are accepted as synonyms of `eq` and `like`.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_lowercase().as_str() {
            "eq" | "f" => Some(Operator::Eq),
            "like" | "p" => Some(Operator::Like),
            "gt" => Some(Operator::Gt),
            "gte" => Some(Operator::Gte),
            "lt" => Some(Operator::Lt),
            "lte" => Some(Operator::Lte),
            _ => None,
        }
    }

    /// Whether the operator orders values rather than matching them.
    pub fn is_range(self) -> bool {
        matches!(
            self,
            Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Like => "like",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single column comparison handed to a field's column binding.
pub enum Comparison {
    Eq(Value),
    Gt(Value),
    Gte(Value),
    Lt(Value),
    Lte(Value),
    In(Vec<Value>),
    /// Substring match; the pattern is already escaped and wrapped in `%`.
    Like(String),
}

/// Named chain of relations joining the root entity to the entity that owns a column.
///
/// The name identifies the join within a request so that two fields living on the same
/// related entity share one join.
#[derive(Clone, Copy)]
pub struct JoinPath {
    pub name: &'static str,
    relations: fn() -> Vec<RelationDef>,
}

impl JoinPath {
    pub const fn new(name: &'static str, relations: fn() -> Vec<RelationDef>) -> Self {
        Self { name, relations }
    }

    /// Relations to join, in order, starting from the root entity.
    pub fn relations(&self) -> Vec<RelationDef> {
        (self.relations)()
    }
}

type CompareFn = Arc<dyn Fn(Comparison) -> Condition + Send + Sync>;
type OrderFn<E> = Arc<dyn Fn(Select<E>, Order) -> Select<E> + Send + Sync>;

/// Filterable field of a root entity `E`.
pub struct FilterField<E: EntityTrait> {
    key: &'static str,
    aliases: Vec<&'static str>,
    kind: FieldKind,
    join: Option<JoinPath>,
    range: bool,
    multi_valued: bool,
    compare: CompareFn,
    order: OrderFn<E>,
}

impl<E: EntityTrait> FilterField<E> {
    /// Creates an equality-only field bound to `column`.
    ///
    /// `column` may belong to another entity, in which case the field must also be given
    /// the `JoinPath` that reaches that entity.
    ///
    /// # Arguments
    /// - `key` - Canonical query key
    /// - `kind` - Value type used to coerce raw values
    /// - `column` - Column the key filters on
    pub fn new<C>(key: &'static str, kind: FieldKind, column: C) -> Self
    where
        C: ColumnTrait + Send + Sync + 'static,
    {
        Self {
            key,
            aliases: Vec::new(),
            kind,
            join: None,
            range: false,
            multi_valued: false,
            compare: Arc::new(move |comparison| {
                let expr = match comparison {
                    Comparison::Eq(v) => column.eq(v),
                    Comparison::Gt(v) => column.gt(v),
                    Comparison::Gte(v) => column.gte(v),
                    Comparison::Lt(v) => column.lt(v),
                    Comparison::Lte(v) => column.lte(v),
                    Comparison::In(values) => column.is_in(values),
                    Comparison::Like(pattern) => column.like(LikeExpr::new(pattern).escape('\\')),
                };
                Condition::all().add(expr)
            }),
            order: Arc::new(move |select, order| select.order_by(column, order)),
        }
    }

    /// Allows `gt`, `gte`, `lt` and `lte` on this field.
    pub fn range(mut self) -> Self {
        self.range = true;
        self
    }

    /// Collapses repeated `eq` values into a single `IN` match instead of ANDing them.
    pub fn multi_valued(mut self) -> Self {
        self.multi_valued = true;
        self
    }

    /// Marks the column as living on a related entity reached through `join`.
    pub fn join(mut self, join: JoinPath) -> Self {
        self.join = Some(join);
        self
    }

    /// Registers an additional query key for this field.
    pub fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn join_path(&self) -> Option<&JoinPath> {
        self.join.as_ref()
    }

    pub fn is_range(&self) -> bool {
        self.range
    }

    pub fn is_multi_valued(&self) -> bool {
        self.multi_valued
    }

    /// Only columns of the root entity can order a page; joined columns repeat per row.
    pub fn is_sortable(&self) -> bool {
        self.join.is_none()
    }

    /// Builds the condition for `comparison` against the bound column.
    pub fn condition(&self, comparison: Comparison) -> Condition {
        (self.compare)(comparison)
    }

    /// Appends an ORDER BY on the bound column.
    pub fn order(&self, select: Select<E>, order: Order) -> Select<E> {
        (self.order)(select, order)
    }
}

/// Immutable mapping from query key to `FilterField` for one root entity.
///
/// Lookups are case-insensitive and aliases resolve to the same field.
pub struct FieldRegistry<E: EntityTrait> {
    fields: Vec<FilterField<E>>,
    index: HashMap<String, usize>,
}

impl<E: EntityTrait> Default for FieldRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> FieldRegistry<E> {
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds a field under its key and every alias.
    ///
    /// # Panics
    /// Panics if a key or alias is already registered. Registries are static tables,
    /// so a clash is a programming error caught on first use.
    pub fn field(mut self, field: FilterField<E>) -> Self {
        let position = self.fields.len();
        for key in std::iter::once(field.key).chain(field.aliases.iter().copied()) {
            let previous = self.index.insert(key.to_lowercase(), position);
            assert!(previous.is_none(), "duplicate search key '{}'", key);
        }
        self.fields.push(field);
        self
    }

    /// Resolves a query key to its field.
    ///
    /// # Returns
    /// - `Some(&FilterField)` - Key or alias is registered
    /// - `None` - Key is unknown for this entity
    pub fn resolve(&self, key: &str) -> Option<&FilterField<E>> {
        self.index
            .get(&key.to_lowercase())
            .map(|position| &self.fields[*position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::gift_certificate::{Column, Entity};

    fn registry() -> FieldRegistry<Entity> {
        FieldRegistry::new()
            .field(FilterField::new("name", FieldKind::String, Column::Name))
            .field(
                FilterField::new("createDate", FieldKind::DateTime, Column::CreateDate)
                    .range()
                    .alias("create"),
            )
    }

    #[test]
    fn resolves_keys_case_insensitively() {
        let registry = registry();

        assert_eq!(registry.resolve("NAME").map(|f| f.key()), Some("name"));
        assert_eq!(
            registry.resolve("createdate").map(|f| f.key()),
            Some("createDate")
        );
    }

    #[test]
    fn resolves_alias_to_canonical_field() {
        let registry = registry();

        let field = registry.resolve("create").unwrap();

        assert_eq!(field.key(), "createDate");
        assert!(field.is_range());
    }

    #[test]
    fn unknown_key_does_not_resolve() {
        assert!(registry().resolve("price").is_none());
    }

    #[test]
    #[should_panic(expected = "duplicate search key")]
    fn rejects_duplicate_keys() {
        let _ = registry().field(FilterField::new("Name", FieldKind::String, Column::Name));
    }

    #[test]
    fn parses_operator_prefixes() {
        assert_eq!(Operator::from_prefix("f"), Some(Operator::Eq));
        assert_eq!(Operator::from_prefix("P"), Some(Operator::Like));
        assert_eq!(Operator::from_prefix("gte"), Some(Operator::Gte));
        assert_eq!(Operator::from_prefix("between"), None);
        assert!(Operator::Lt.is_range());
        assert!(!Operator::Like.is_range());
    }
}
