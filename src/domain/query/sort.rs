use std::fmt;
use std::str::FromStr;

use sqlx::{Postgres, QueryBuilder};

use super::column::Column;
use crate::domain::player::PlayerTeamRow;
use crate::domain::repositories::errors::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl FromStr for Direction {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            other => Err(RepositoryError::InvalidSort {
                property: format!("direction '{}'", other),
            }),
        }
    }
}

/// A single ordering term, by property name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

impl Order {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.property, self.direction.sql().to_lowercase())
    }
}

/// An order term whose property has been resolved to a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOrder {
    pub column: Column,
    pub direction: Direction,
}

/// Ordered list of ordering terms; earlier terms take precedence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    pub fn and(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resolves every property against the player relation
    ///
    /// # Errors
    /// `RepositoryError::InvalidSort` naming the first unknown property.
    pub fn resolve(&self) -> RepositoryResult<Vec<ResolvedOrder>> {
        self.orders
            .iter()
            .map(|order| {
                Column::from_player_property(&order.property)
                    .map(|column| ResolvedOrder {
                        column,
                        direction: order.direction,
                    })
                    .ok_or_else(|| RepositoryError::InvalidSort {
                        property: order.property.clone(),
                    })
            })
            .collect()
    }

    /// Parses `property[:asc|desc]` terms separated by commas
    ///
    /// # Example
    /// ```
    /// use roster_query_api::domain::query::{Direction, Sort};
    ///
    /// let sort = Sort::parse("weeklySalary:desc, name").expect("valid sort");
    /// assert_eq!(sort.orders().len(), 2);
    /// assert_eq!(sort.orders()[0].direction, Direction::Desc);
    /// ```
    pub fn parse(input: &str) -> RepositoryResult<Self> {
        let mut orders = Vec::new();
        for term in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let order = match term.split_once(':') {
                Some((property, direction)) => Order {
                    property: property.trim().to_string(),
                    direction: direction.trim().parse()?,
                },
                None => Order::asc(term),
            };
            orders.push(order);
        }
        Ok(Self { orders })
    }
}

/// Appends ` ORDER BY ...` for `orders`, always ending with a tie-break on
/// the player id so that page boundaries are stable
///
/// Text terms are collated `"C"` so that PostgreSQL orders them byte-wise,
/// the same as `sort_rows`.
pub fn push_order_by(builder: &mut QueryBuilder<'_, Postgres>, orders: &[ResolvedOrder]) {
    builder.push(" ORDER BY ");
    for order in orders {
        builder.push(order.column.sql());
        if order.column.is_text() {
            builder.push(" COLLATE \"C\"");
        }
        builder.push(" ").push(order.direction.sql()).push(", ");
    }
    builder.push(Column::PlayerId.sql()).push(" ASC");
}

/// In-process counterpart of `push_order_by`; text compares byte-wise
pub fn sort_rows(rows: &mut [PlayerTeamRow], orders: &[ResolvedOrder]) {
    rows.sort_by(|left, right| {
        orders
            .iter()
            .map(|order| {
                let ordering = order.column.value_of(left).cmp(&order.column.value_of(right));
                match order.direction {
                    Direction::Asc => ordering,
                    Direction::Desc => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| left.id.cmp(&right.id))
    });
}
