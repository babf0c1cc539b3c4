//! Expense category registry
//!
//! Fixed and variable expenses each draw their category from a closed,
//! ordered set of labels. Order only matters when a category is picked by
//! position; membership is what the rest of the crate relies on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Behaviour shared by both category enumerations
pub trait CategorySet: Copy + PartialEq + Sized + 'static {
    /// Every category in display order
    const ALL: &'static [Self];

    /// Category used when no valid selection was made
    const FALLBACK: Self;

    /// Human readable label, identical to the persisted value
    fn label(&self) -> &'static str;

    /// Category at `index` in [`Self::ALL`].
    ///
    /// Negative and out-of-range indices both resolve to [`Self::FALLBACK`],
    /// so the lookup is total and never yields an invalid label.
    fn at(index: isize) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Self::FALLBACK)
    }

    /// Position of this category in [`Self::ALL`]
    fn position(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ALL.len() - 1)
    }

    /// Case-insensitive lookup by label
    fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }

    /// All labels in display order
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

/// Index lookup that works for either category set
pub fn category_at<C: CategorySet>(index: isize) -> C {
    C::at(index)
}

/// Categories for recurring monthly costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FixedExpenseCategory {
    /// Rent, electricity, water, gas
    Bills,
    /// Streaming and music subscriptions
    Entertainment,
    Food,
    /// Gym, library
    Membership,
    Shopping,
    /// Public transport, taxi
    Travel,
    /// Gifts, donations
    Other,
}

impl CategorySet for FixedExpenseCategory {
    const ALL: &'static [Self] = &[
        Self::Bills,
        Self::Entertainment,
        Self::Food,
        Self::Membership,
        Self::Shopping,
        Self::Travel,
        Self::Other,
    ];

    const FALLBACK: Self = Self::Other;

    fn label(&self) -> &'static str {
        match self {
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Food => "Food",
            Self::Membership => "Membership",
            Self::Shopping => "Shopping",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

/// Categories for dated one-off costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VariableExpenseCategory {
    /// Cinema, sports
    Activities,
    /// Books, courses
    Education,
    Food,
    /// Doctor, dentist
    Health,
    /// Toiletries, haircuts
    Hygiene,
    Shopping,
    Travel,
    /// Gifts, donations, money transfers
    Other,
}

impl CategorySet for VariableExpenseCategory {
    const ALL: &'static [Self] = &[
        Self::Activities,
        Self::Education,
        Self::Food,
        Self::Health,
        Self::Hygiene,
        Self::Shopping,
        Self::Travel,
        Self::Other,
    ];

    const FALLBACK: Self = Self::Other;

    fn label(&self) -> &'static str {
        match self {
            Self::Activities => "Activities",
            Self::Education => "Education",
            Self::Food => "Food",
            Self::Health => "Health",
            Self::Hygiene => "Hygiene",
            Self::Shopping => "Shopping",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }
}

/// Error returned when a label is not part of a category set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory {
    pub label: String,
    pub valid: Vec<&'static str>,
}

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.label,
            self.valid.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

macro_rules! impl_category_traits {
    ($name:ident) => {
        impl Default for $name {
            fn default() -> Self {
                <Self as CategorySet>::FALLBACK
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCategory;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s).ok_or_else(|| UnknownCategory {
                    label: s.to_string(),
                    valid: Self::labels(),
                })
            }
        }
    };
}

impl_category_traits!(FixedExpenseCategory);
impl_category_traits!(VariableExpenseCategory);
