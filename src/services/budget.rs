//! Budget controller
//!
//! The single owner of the budget: both item lists, the planned investment,
//! and which add-item form (if any) is open. Every user action is a method
//! here; totals are derived from the lists on read.

use tracing::{debug, warn};

use crate::config::settings::Settings;
use crate::error::{MoneyFixError, MoneyFixResult};
use crate::models::{FinanceItem, ItemKind, ItemList, Money};
use crate::reports::ReportData;

use super::invest::InvestmentPlanner;

/// Owns all budget state for one session
#[derive(Debug, Clone)]
pub struct BudgetController {
    income: ItemList,
    expenses: ItemList,
    planner: InvestmentPlanner,
    active_modal: Option<ItemKind>,
}

impl BudgetController {
    /// Create a controller from seed items
    pub fn new(
        income: Vec<FinanceItem>,
        expenses: Vec<FinanceItem>,
        initial_invest: Money,
        slider_step: Money,
    ) -> Self {
        let income = ItemList::from_items(income);
        let expenses = ItemList::from_items(expenses);
        let remaining = income.total() - expenses.total();
        Self {
            income,
            expenses,
            planner: InvestmentPlanner::new(initial_invest, slider_step, remaining),
            active_modal: None,
        }
    }

    /// Create a controller seeded from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.initial_income.clone(),
            settings.initial_expenses.clone(),
            settings.initial_invest,
            settings.slider_step,
        )
    }

    /// The list for the given kind
    pub fn list(&self, kind: ItemKind) -> &ItemList {
        match kind {
            ItemKind::Income => &self.income,
            ItemKind::Expense => &self.expenses,
        }
    }

    fn list_mut(&mut self, kind: ItemKind) -> &mut ItemList {
        match kind {
            ItemKind::Income => &mut self.income,
            ItemKind::Expense => &mut self.expenses,
        }
    }

    /// Sum of all income items
    pub fn total_income(&self) -> Money {
        self.income.total()
    }

    /// Sum of all expense items
    pub fn total_expenses(&self) -> Money {
        self.expenses.total()
    }

    /// Income minus expenses (may be negative)
    pub fn remaining(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Planned investment amount
    pub fn invest_amount(&self) -> Money {
        self.planner.amount()
    }

    /// Fine step of the investment slider
    pub fn invest_step(&self) -> Money {
        self.planner.step()
    }

    /// Upper bound of the investment slider
    pub fn invest_upper_bound(&self) -> Money {
        InvestmentPlanner::upper_bound(self.remaining())
    }

    /// Fraction of the slider range selected
    pub fn invest_ratio(&self) -> f64 {
        self.planner.ratio(self.remaining())
    }

    /// Which add-item form is open
    pub fn active_modal(&self) -> Option<ItemKind> {
        self.active_modal
    }

    /// Open the add-item form for a list
    pub fn open_add(&mut self, kind: ItemKind) {
        debug!(%kind, "opening add-item form");
        self.active_modal = Some(kind);
    }

    /// Close the add-item form without adding anything
    pub fn close_add(&mut self) {
        self.active_modal = None;
    }

    /// Add an item to the list targeted by the open form, then close the form
    ///
    /// Returns the kind the item was added to, or None if no form was open.
    /// A refused item leaves the form open.
    pub fn submit_item(&mut self, item: FinanceItem) -> MoneyFixResult<Option<ItemKind>> {
        let Some(target) = self.active_modal else {
            return Ok(None);
        };
        self.add_item(target, item)?;
        self.active_modal = None;
        Ok(Some(target))
    }

    /// Append an item to a list
    ///
    /// Refused with a validation error if the list total would leave the
    /// allowed range.
    pub fn add_item(&mut self, kind: ItemKind, item: FinanceItem) -> MoneyFixResult<()> {
        let total = self.list(kind).total().checked_add(item.amount);
        Self::check_total(kind, total)?;
        debug!(%kind, label = %item.label, amount = %item.amount, "adding item");
        self.list_mut(kind).push(item);
        self.reclamp_invest();
        Ok(())
    }

    /// Replace the amount of an item from raw text input
    ///
    /// Malformed text is rejected with a validation error and the list is left
    /// unchanged. Returns Ok(false) if the index no longer exists.
    pub fn update_amount(
        &mut self,
        kind: ItemKind,
        index: usize,
        text: &str,
    ) -> MoneyFixResult<bool> {
        let amount = Money::parse(text).map_err(|e| {
            warn!(%kind, index, input = text, "rejected amount edit");
            e
        })?;
        self.set_amount(kind, index, amount)
    }

    /// Replace the amount of an item
    ///
    /// Returns Ok(false) if the index is out of range.
    pub fn set_amount(
        &mut self,
        kind: ItemKind,
        index: usize,
        amount: Money,
    ) -> MoneyFixResult<bool> {
        let list = self.list(kind);
        let Some(current) = list.get(index).map(|item| item.amount) else {
            return Ok(false);
        };
        let total = list
            .total()
            .checked_sub(current)
            .and_then(|rest| rest.checked_add(amount));
        Self::check_total(kind, total)?;

        self.list_mut(kind).set_amount(index, amount);
        debug!(%kind, index, %amount, "updated amount");
        self.reclamp_invest();
        Ok(true)
    }

    /// Delete an item; later items shift down by one
    pub fn delete_item(&mut self, kind: ItemKind, index: usize) -> Option<FinanceItem> {
        let removed = self.list_mut(kind).remove(index);
        if let Some(ref item) = removed {
            debug!(%kind, index, label = %item.label, "deleted item");
            self.reclamp_invest();
        }
        removed
    }

    /// Set the planned investment, clamped to the slider range
    pub fn set_invest(&mut self, amount: Money) {
        let remaining = self.remaining();
        self.planner.set(amount, remaining);
    }

    /// Move the slider up
    pub fn increase_invest(&mut self, coarse: bool) {
        let remaining = self.remaining();
        self.planner.increase(remaining, coarse);
    }

    /// Move the slider down
    pub fn decrease_invest(&mut self, coarse: bool) {
        let remaining = self.remaining();
        self.planner.decrease(remaining, coarse);
    }

    /// Put everything that remains into the investment
    pub fn invest_all(&mut self) {
        let remaining = self.remaining();
        self.planner.to_max(remaining);
    }

    /// Plan no investment
    pub fn invest_nothing(&mut self) {
        self.planner.to_zero();
    }

    /// Snapshot of the current state for the report
    pub fn report_data(&self, month: &str, year: i32) -> ReportData {
        ReportData {
            month: month.to_string(),
            year,
            total_income: self.total_income(),
            income_items: self.income.items().to_vec(),
            total_expenses: self.total_expenses(),
            expense_items: self.expenses.items().to_vec(),
            invest_amount: self.invest_amount(),
            remaining: self.remaining(),
        }
    }

    fn check_total(kind: ItemKind, total: Option<Money>) -> MoneyFixResult<()> {
        if total.is_some() {
            return Ok(());
        }
        warn!(%kind, "refused change, total out of range");
        Err(MoneyFixError::Validation(format!(
            "Summe der {} wäre zu groß (höchstens {} €)",
            kind.title(),
            Money::MAX.euros()
        )))
    }

    fn reclamp_invest(&mut self) {
        let remaining = self.remaining();
        if self.planner.clamp_to(remaining) {
            debug!(invest = %self.planner.amount(), "investment clamped to remaining");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(label: &str, euros: i64) -> FinanceItem {
        FinanceItem::new(label, Money::from_euros(euros)).unwrap()
    }

    fn scenario() -> BudgetController {
        BudgetController::new(
            vec![item("Salary", 4200), item("Side", 350)],
            vec![item("Fixed", 1650), item("Leisure", 1060)],
            Money::from_euros(500),
            Money::from_euros(10),
        )
    }

    #[test]
    fn test_initial_remaining() {
        let controller = scenario();
        assert_eq!(controller.total_income(), Money::from_euros(4550));
        assert_eq!(controller.total_expenses(), Money::from_euros(2710));
        assert_eq!(controller.remaining(), Money::from_euros(1840));
    }

    #[test]
    fn test_add_income_through_form() {
        let mut controller = scenario();
        controller.open_add(ItemKind::Income);
        let target = controller.submit_item(item("Bonus", 200)).unwrap();
        assert_eq!(target, Some(ItemKind::Income));
        assert_eq!(controller.active_modal(), None);
        assert_eq!(controller.total_income(), Money::from_euros(4750));
        assert_eq!(controller.remaining(), Money::from_euros(2090));
    }

    #[test]
    fn test_submit_without_open_form_is_ignored() {
        let mut controller = scenario();
        assert_eq!(controller.submit_item(item("Bonus", 200)).unwrap(), None);
        assert_eq!(controller.total_income(), Money::from_euros(4550));
    }

    #[test]
    fn test_delete_first_expense() {
        let mut controller = scenario();
        let removed = controller.delete_item(ItemKind::Expense, 0).unwrap();
        assert_eq!(removed.label, "Fixed");
        assert_eq!(controller.total_expenses(), Money::from_euros(1060));
        assert_eq!(controller.remaining(), Money::from_euros(3490));
    }

    #[test]
    fn test_update_amount_rejects_garbage() {
        let mut controller = scenario();
        let err = controller
            .update_amount(ItemKind::Income, 0, "abc")
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.list(ItemKind::Income).items()[0].amount, Money::from_euros(4200));
    }

    #[test]
    fn test_update_amount_out_of_range() {
        let mut controller = scenario();
        assert!(!controller.update_amount(ItemKind::Income, 9, "10").unwrap());
        assert!(controller.update_amount(ItemKind::Income, 1, "400").unwrap());
        assert_eq!(controller.total_income(), Money::from_euros(4600));
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let mut controller = scenario();
        controller.add_item(ItemKind::Expense, item("Auto", 5000)).unwrap();
        assert_eq!(controller.remaining(), Money::from_euros(-3160));
        assert_eq!(controller.invest_amount(), Money::zero());
        assert_eq!(controller.invest_upper_bound(), Money::zero());
    }

    #[test]
    fn test_invest_clamped_when_remaining_shrinks() {
        let mut controller = scenario();
        controller.invest_all();
        assert_eq!(controller.invest_amount(), Money::from_euros(1840));
        controller.set_amount(ItemKind::Income, 1, Money::zero()).unwrap();
        assert_eq!(controller.invest_amount(), Money::from_euros(1490));
    }

    #[test]
    fn test_add_refused_when_total_would_overflow() {
        let mut controller = scenario();
        controller.add_item(ItemKind::Income, item("Lotto", 999_990_000)).unwrap();

        let err = controller
            .add_item(ItemKind::Income, item("Noch mehr", 999_990_000))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.list(ItemKind::Income).len(), 3);
        assert_eq!(controller.total_income(), Money::from_euros(999_994_550));
    }

    #[test]
    fn test_refused_submit_keeps_form_open() {
        let mut controller = scenario();
        controller.add_item(ItemKind::Expense, item("Haus", 999_000_000)).unwrap();
        controller.open_add(ItemKind::Expense);

        assert!(controller.submit_item(item("Yacht", 5_000_000)).is_err());
        assert_eq!(controller.active_modal(), Some(ItemKind::Expense));
        assert_eq!(controller.list(ItemKind::Expense).len(), 3);
    }

    #[test]
    fn test_update_refused_when_total_would_overflow() {
        let mut controller = scenario();
        controller.add_item(ItemKind::Income, item("Erbe", 999_000_000)).unwrap();

        let err = controller
            .update_amount(ItemKind::Income, 0, "1000000000")
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(controller.list(ItemKind::Income).items()[0].amount, Money::from_euros(4200));

        let err = controller
            .update_amount(ItemKind::Income, 0, "90000000000000000")
            .unwrap_err();
        assert!(err.is_validation());
        assert!(controller.update_amount(ItemKind::Income, 0, "1.000").unwrap());
        assert_eq!(controller.list(ItemKind::Income).items()[0].amount, Money::from_euros(1000));
    }

    #[test]
    fn test_report_data_snapshot() {
        let controller = scenario();
        let data = controller.report_data("Januar", 2026);
        assert_eq!(data.remaining, Money::from_euros(1840));
        assert_eq!(data.income_items.len(), 2);
        assert_eq!(data.invest_amount, Money::from_euros(500));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(bool, i64),
        Update(bool, usize, i64),
        Delete(bool, usize),
        Invest(i64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (any::<bool>(), amount()).prop_map(|(k, c)| Op::Add(k, c)),
            (any::<bool>(), 0usize..8, amount()).prop_map(|(k, i, c)| Op::Update(k, i, c)),
            (any::<bool>(), 0usize..8).prop_map(|(k, i)| Op::Delete(k, i)),
            (-10_000i64..10_000).prop_map(Op::Invest),
        ]
    }

    // Mostly everyday amounts, sometimes amounts at or near the limit
    fn amount() -> impl Strategy<Value = i64> {
        let max = Money::MAX.cents();
        prop_oneof![
            4 => -100_000i64..100_000,
            1 => (max - 100)..=max,
            1 => -max..=(100 - max),
        ]
    }

    fn kind(income: bool) -> ItemKind {
        if income {
            ItemKind::Income
        } else {
            ItemKind::Expense
        }
    }

    proptest! {
        #[test]
        fn prop_totals_and_invest_bounds_hold(ops in proptest::collection::vec(op(), 0..40)) {
            let mut controller = scenario();
            for op in ops {
                match op {
                    Op::Add(k, cents) => {
                        let item = FinanceItem {
                            label: "x".into(),
                            amount: Money::from_cents(cents),
                        };
                        let _ = controller.add_item(kind(k), item);
                    }
                    Op::Update(k, i, cents) => {
                        let _ = controller.set_amount(kind(k), i, Money::from_cents(cents));
                    }
                    Op::Delete(k, i) => {
                        controller.delete_item(kind(k), i);
                    }
                    Op::Invest(euros) => controller.set_invest(Money::from_euros(euros)),
                }

                let sum = |kind| -> Money {
                    controller.list(kind).items().iter().map(|i| i.amount).sum()
                };
                let income = sum(ItemKind::Income);
                let expenses = sum(ItemKind::Expense);
                prop_assert_eq!(controller.total_income(), income);
                prop_assert_eq!(controller.total_expenses(), expenses);
                prop_assert_eq!(controller.remaining(), income - expenses);
                prop_assert!(income.is_within_limit());
                prop_assert!(expenses.is_within_limit());

                let invest = controller.invest_amount();
                prop_assert!(invest >= Money::zero());
                prop_assert!(invest <= controller.remaining().max(Money::zero()));
            }
        }

        #[test]
        fn prop_delete_preserves_order(len in 1usize..10, index in 0usize..10) {
            let items: Vec<_> = (0..len).map(|i| item(&format!("item {i}"), i as i64)).collect();
            let mut controller =
                BudgetController::new(items.clone(), vec![], Money::zero(), Money::from_euros(1));
            let removed = controller.delete_item(ItemKind::Income, index);
            let after = controller.list(ItemKind::Income).items();

            if index < len {
                prop_assert_eq!(removed.as_ref(), Some(&items[index]));
                prop_assert_eq!(after.len(), len - 1);
                prop_assert_eq!(&after[..index], &items[..index]);
                prop_assert_eq!(&after[index..], &items[index + 1..]);
            } else {
                prop_assert!(removed.is_none());
                prop_assert_eq!(after, &items[..]);
            }
        }
    }
}
