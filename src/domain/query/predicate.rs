use sqlx::{Postgres, QueryBuilder};

use super::column::{Column, Value};
use super::filter::{Criterion, PlayerQueryParam};
use crate::domain::player::PlayerTeamRow;

/// Boolean condition over a joined player/team row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Eq(Column, Value),
    IsNull(Column),
    And(Vec<Predicate>),
}

impl Predicate {
    pub fn eq(column: Column, value: Value) -> Self {
        Predicate::Eq(column, value)
    }

    pub fn is_null(column: Column) -> Self {
        Predicate::IsNull(column)
    }

    /// Folds `predicates` with logical AND
    ///
    /// Returns `None` for an empty list, meaning "match everything".
    pub fn all(mut predicates: Vec<Predicate>) -> Option<Self> {
        match predicates.len() {
            0 => None,
            1 => predicates.pop(),
            _ => Some(Predicate::And(predicates)),
        }
    }

    pub fn and(self, other: Predicate) -> Self {
        match self {
            Predicate::And(mut items) => {
                items.push(other);
                Predicate::And(items)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Evaluates the predicate in process with SQL NULL semantics
    ///
    /// Equality against a NULL column never matches.
    pub fn matches(&self, row: &PlayerTeamRow) -> bool {
        match self {
            Predicate::Eq(column, value) => column.value_of(row).as_ref() == Some(value),
            Predicate::IsNull(column) => column.value_of(row).is_none(),
            Predicate::And(items) => items.iter().all(|item| item.matches(row)),
        }
    }

    /// Appends the predicate to `builder`, binding every value as a parameter
    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Predicate::Eq(column, value) => {
                builder.push(column.sql()).push(" = ");
                match value {
                    Value::Bool(v) => builder.push_bind(*v),
                    Value::Int(v) => builder.push_bind(*v),
                    Value::Text(v) => builder.push_bind(v.clone()),
                    Value::Uuid(v) => builder.push_bind(*v),
                };
            }
            Predicate::IsNull(column) => {
                builder.push(column.sql()).push(" IS NULL");
            }
            Predicate::And(items) if items.is_empty() => {
                builder.push("TRUE");
            }
            Predicate::And(items) => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        builder.push(" AND ");
                    }
                    if matches!(item, Predicate::And(_)) {
                        builder.push("(");
                        item.push_sql(builder);
                        builder.push(")");
                    } else {
                        item.push_sql(builder);
                    }
                }
            }
        }
    }
}

/// Applies `comparator` to the criterion's value, or yields no predicate
/// when the criterion is unconstrained
pub fn condition<T>(
    criterion: &Criterion<T>,
    comparator: impl FnOnce(&T) -> Predicate,
) -> Option<Predicate> {
    criterion.value().map(comparator)
}

/// Builds the conjunction of equality predicates for every constrained field
pub fn compose(param: &PlayerQueryParam) -> Option<Predicate> {
    let predicates = [
        condition(&param.name, |name| {
            Predicate::eq(Column::PlayerName, Value::Text(name.clone()))
        }),
        condition(&param.age, |age| Predicate::eq(Column::PlayerAge, Value::Int(*age))),
        condition(&param.team_name, |team_name| match team_name {
            Some(name) => Predicate::eq(Column::TeamName, Value::Text(name.clone())),
            None => Predicate::is_null(Column::TeamName),
        }),
    ];

    Predicate::all(predicates.into_iter().flatten().collect())
}

/// Appends ` WHERE <predicate>` when there is a predicate to apply
pub fn push_where(builder: &mut QueryBuilder<'_, Postgres>, predicate: Option<&Predicate>) {
    if let Some(predicate) = predicate {
        builder.push(" WHERE ");
        predicate.push_sql(builder);
    }
}
