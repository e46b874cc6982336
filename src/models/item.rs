//! Finance item model
//!
//! A finance item is a labeled amount, either an income source or an expense
//! category. Items live in one of two ordered [`ItemList`]s.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{MoneyFixError, MoneyFixResult};

/// Which of the two collections an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Income,
    Expense,
}

impl ItemKind {
    /// Section title shown above the list
    pub fn title(&self) -> &'static str {
        match self {
            Self::Income => "Einnahmen",
            Self::Expense => "Ausgaben",
        }
    }

    /// Title of the add-item dialog for this kind
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::Income => "Neue Einnahmequelle",
            Self::Expense => "Neue Ausgabe",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A labeled monetary amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceItem {
    /// Display label, never empty
    pub label: String,
    /// Amount in euros, may be negative
    pub amount: Money,
}

impl FinanceItem {
    /// Create a new item, validating the label
    pub fn new(label: impl Into<String>, amount: Money) -> MoneyFixResult<Self> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(MoneyFixError::Validation(
                "Bezeichnung darf nicht leer sein".into(),
            ));
        }
        Ok(Self { label, amount })
    }
}

/// An ordered list of finance items with a memoized total
///
/// Every mutation bumps the revision; [`ItemList::total`] only re-sums when
/// the revision it cached differs from the current one.
#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<FinanceItem>,
    revision: u64,
    cached_total: Cell<Option<(u64, Money)>>,
}

impl ItemList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from existing items
    pub fn from_items(items: Vec<FinanceItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// All items in display order
    pub fn items(&self) -> &[FinanceItem] {
        &self.items
    }

    /// Get an item by index
    pub fn get(&self, index: usize) -> Option<&FinanceItem> {
        self.items.get(index)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current revision, bumped on every mutation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        if let Some((rev, total)) = self.cached_total.get() {
            if rev == self.revision {
                return total;
            }
        }
        let total: Money = self.items.iter().map(|item| item.amount).sum();
        self.cached_total.set(Some((self.revision, total)));
        total
    }

    /// Append an item at the end
    pub fn push(&mut self, item: FinanceItem) {
        self.items.push(item);
        self.touch();
    }

    /// Replace the amount of the item at `index`
    ///
    /// Returns false (and leaves the list untouched) if the index is out of range.
    pub fn set_amount(&mut self, index: usize, amount: Money) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.amount = amount;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Remove the item at `index`, shifting later items down
    ///
    /// Returns the removed item, or None if the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<FinanceItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.touch();
        Some(removed)
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
