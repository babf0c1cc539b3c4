//! Sorting and paging for expense tables
//!
//! Sorting never mutates its input. Field labels come straight from table
//! headers and user input, so they are matched case-insensitively, and a
//! label that does not name a sortable field leaves the order untouched.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{CategorySet, FixedExpenseItem, VariableExpenseItem};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!(
                "Unknown sort order '{}' (expected ascending or descending)",
                other
            )),
        }
    }
}

/// Columns a table can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Amount,
    Category,
    Date,
}

impl SortField {
    /// Match a column label case-insensitively
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "amount" => Some(Self::Amount),
            "category" => Some(Self::Category),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

/// Records that can be ordered by table column
pub trait Sortable: Clone {
    /// Whether this record type has the column at all
    fn supports(field: SortField) -> bool;

    /// Ascending comparison on `field`; only called for supported fields
    fn compare_by(&self, other: &Self, field: SortField) -> Ordering;
}

/// String comparison that ignores case first, then puts lowercase before
/// uppercase, the way locale-aware collation orders plain words.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

impl Sortable for FixedExpenseItem {
    fn supports(field: SortField) -> bool {
        !matches!(field, SortField::Date)
    }

    fn compare_by(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Name => locale_compare(&self.name, &other.name),
            SortField::Amount => self.amount.total_cmp(&other.amount),
            SortField::Category => locale_compare(self.category.label(), other.category.label()),
            SortField::Date => Ordering::Equal,
        }
    }
}

impl Sortable for VariableExpenseItem {
    fn supports(_field: SortField) -> bool {
        true
    }

    fn compare_by(&self, other: &Self, field: SortField) -> Ordering {
        match field {
            SortField::Name => locale_compare(&self.name, &other.name),
            SortField::Amount => self.amount.total_cmp(&other.amount),
            SortField::Category => locale_compare(self.category.label(), other.category.label()),
            SortField::Date => self.date.cmp(&other.date),
        }
    }
}

/// Sorted copy of `items`.
///
/// The sort is stable. An unknown label, or one naming a column the record
/// type lacks, returns the items in their original order.
pub fn sort_by<T: Sortable>(items: &[T], field_label: &str, order: SortOrder) -> Vec<T> {
    let mut sorted = items.to_vec();

    let Some(field) = SortField::parse(field_label).filter(|f| T::supports(*f)) else {
        return sorted;
    };

    sorted.sort_by(|a, b| match order {
        SortOrder::Ascending => a.compare_by(b, field),
        SortOrder::Descending => b.compare_by(a, field),
    });
    sorted
}

/// A default table ordering, as stored in settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Sorted copy of `items` using this spec
    pub fn apply<T: Sortable>(&self, items: &[T]) -> Vec<T> {
        sort_by(items, &self.field, self.order)
    }
}

/// Split `items` into pages of `per_page` rows.
///
/// An empty list has no pages; `per_page == 0` puts everything on one page.
pub fn paginate<T>(items: &[T], per_page: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    if per_page == 0 {
        return vec![items];
    }
    items.chunks(per_page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FixedExpenseCategory, VariableExpenseCategory};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixed_items() -> Vec<FixedExpenseItem> {
        vec![
            FixedExpenseItem::new("rent", 8000.0, FixedExpenseCategory::Bills),
            FixedExpenseItem::new("Gym", 399.0, FixedExpenseCategory::Membership),
            FixedExpenseItem::new("Netflix", 129.0, FixedExpenseCategory::Entertainment),
            FixedExpenseItem::new("Insurance", 399.0, FixedExpenseCategory::Bills),
        ]
    }

    fn names<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
        items.into_iter().map(|n| n.as_ref().to_string()).collect()
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let sorted = sort_by(&fixed_items(), "Name", SortOrder::Ascending);
        assert_eq!(
            names(sorted.iter().map(|e| e.name.as_str())),
            ["Gym", "Insurance", "Netflix", "rent"]
        );
    }

    #[test]
    fn test_sort_by_amount_descending_is_stable() {
        let sorted = sort_by(&fixed_items(), "amount", SortOrder::Descending);
        assert_eq!(
            names(sorted.iter().map(|e| e.name.as_str())),
            ["rent", "Gym", "Insurance", "Netflix"]
        );
    }

    #[test]
    fn test_sort_by_category() {
        let sorted = sort_by(&fixed_items(), "CATEGORY", SortOrder::Ascending);
        let categories: Vec<_> = sorted.iter().map(|e| e.category).collect();
        assert_eq!(
            categories,
            [
                FixedExpenseCategory::Bills,
                FixedExpenseCategory::Bills,
                FixedExpenseCategory::Entertainment,
                FixedExpenseCategory::Membership,
            ]
        );
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let items = fixed_items();
        let before = items.clone();
        let _ = sort_by(&items, "amount", SortOrder::Ascending);
        assert_eq!(items, before);
    }

    #[test]
    fn test_unknown_label_keeps_order() {
        let items = fixed_items();
        assert_eq!(sort_by(&items, "colour", SortOrder::Descending), items);
    }

    #[test]
    fn test_date_label_is_noop_for_fixed_expenses() {
        let items = fixed_items();
        assert_eq!(sort_by(&items, "date", SortOrder::Descending), items);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<VariableExpenseItem> = Vec::new();
        assert!(sort_by(&items, "date", SortOrder::Ascending).is_empty());
    }

    #[test]
    fn test_sort_variable_by_date() {
        let items = vec![
            VariableExpenseItem::new(date(2024, 3, 5), "b", 1.0, VariableExpenseCategory::Food),
            VariableExpenseItem::new(date(2024, 1, 9), "a", 1.0, VariableExpenseCategory::Food),
            VariableExpenseItem::new(date(2024, 2, 1), "c", 1.0, VariableExpenseCategory::Food),
        ];

        let asc = sort_by(&items, "Date", SortOrder::default());
        assert_eq!(names(asc.iter().map(|e| e.name.as_str())), ["a", "c", "b"]);

        let desc = sort_by(&items, "date", SortOrder::Descending);
        assert_eq!(names(desc.iter().map(|e| e.name.as_str())), ["b", "c", "a"]);
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Descending);
        assert_eq!("ascending".parse::<SortOrder>().unwrap(), SortOrder::Ascending);
        assert!("sideways".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_spec_apply() {
        let spec = SortSpec::new("Amount", SortOrder::Descending);
        let sorted = spec.apply(&fixed_items());
        assert_eq!(sorted[0].name, "rent");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=25).collect();
        let pages = paginate(&items, 10);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2], &[21, 22, 23, 24, 25][..]);

        assert_eq!(paginate(&items, 0).len(), 1);
        assert!(paginate::<u32>(&[], 10).is_empty());
    }
}
