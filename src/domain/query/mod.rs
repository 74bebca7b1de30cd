// Dynamic query building blocks
// Filters, predicates, ordering and paging shared by every repository adapter

pub mod column;
pub mod filter;
pub mod page;
pub mod predicate;
pub mod sort;

pub use column::{Column, Value};
pub use filter::{Criterion, PlayerQueryInput, PlayerQueryParam};
pub use page::{Page, PageRequest};
pub use predicate::{compose, condition, Predicate};
pub use sort::{Direction, Order, ResolvedOrder, Sort};
