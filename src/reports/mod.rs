//! Derived figures and table ordering
//!
//! Statistics turn store snapshots into totals, per-period breakdowns and the
//! monthly overview. Sorting orders and pages expense tables.

pub mod sorting;
pub mod statistics;

pub use sorting::{locale_compare, paginate, sort_by, SortField, SortOrder, SortSpec, Sortable};
pub use statistics::{
    expenses_in_current_month, first_day_of_month, percentage_of, spending_by_category, sum,
    years_to_reach, CategoryTotal, Overview, PeriodBreakdown,
};
