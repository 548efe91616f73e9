//! Financial-readiness checklist state machine.
//!
//! The checklist seeds a fixed set of default items and lets the user
//! append custom ones. Each item's status cycles through a fixed order on
//! explicit action; aggregate stats are a pure fold over all items,
//! recomputed after every mutation. Default items are fixed in count: they
//! can be re-statused but never removed. Custom items get monotonically
//! increasing ids starting at 1000 and may be removed at any time.
//!
//! Nothing here is persisted; the checklist lives and dies with its owner.

mod item;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use item::{ChecklistCategory, ChecklistItem, ChecklistStatus, ItemOrigin};

/// First id handed to a custom item; default items stay below this.
pub const CUSTOM_ID_START: u32 = 1000;

/// Errors from checklist mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChecklistError {
    /// No item with the given id exists.
    #[error("no checklist item with id {0}")]
    UnknownItem(u32),

    /// Default items can only be re-statused, never removed.
    #[error("checklist item {0} is a default item and cannot be removed")]
    DefaultItemNotRemovable(u32),
}

/// Aggregate counts over all items, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistStats {
    pub yes: usize,
    pub partially: usize,
    pub no: usize,
    /// Items still at `select`.
    pub unanswered: usize,
    pub total: usize,
    /// `round(yes / total * 100)`; 0 when the checklist is empty.
    pub completion_percentage: u8,
}

/// The checklist itself: default plus custom items, updated by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
    next_custom_id: u32,
}

impl Checklist {
    /// An empty checklist with no default items.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_custom_id: CUSTOM_ID_START,
        }
    }

    /// The standard financial-readiness checklist.
    pub fn with_defaults() -> Self {
        let defaults = [
            (
                "Build an emergency fund covering 6 months of expenses",
                ChecklistCategory::EmergencyFund,
            ),
            (
                "Keep the emergency fund in a liquid instrument",
                ChecklistCategory::EmergencyFund,
            ),
            (
                "Hold health insurance for yourself and dependents",
                ChecklistCategory::Insurance,
            ),
            (
                "Hold term life cover of at least 10x annual income",
                ChecklistCategory::Insurance,
            ),
            (
                "Max out Section 80C instruments before year end",
                ChecklistCategory::TaxPlanning,
            ),
            (
                "Compare old and new regime liability before filing",
                ChecklistCategory::TaxPlanning,
            ),
            (
                "Set up a monthly SIP aligned with your risk profile",
                ChecklistCategory::Investing,
            ),
            (
                "Rebalance the portfolio at least once a year",
                ChecklistCategory::Investing,
            ),
            (
                "Contribute to NPS or EPF for retirement",
                ChecklistCategory::Retirement,
            ),
            (
                "Write a will and register nominees on every account",
                ChecklistCategory::Estate,
            ),
        ];

        let items = defaults
            .into_iter()
            .enumerate()
            .map(|(i, (text, category))| ChecklistItem {
                id: i as u32 + 1,
                text: text.to_string(),
                category,
                status: ChecklistStatus::Select,
                origin: ItemOrigin::Default,
            })
            .collect();

        Self {
            items,
            next_custom_id: CUSTOM_ID_START,
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    pub fn get(&self, id: u32) -> Option<&ChecklistItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Appends a user-defined item and returns its assigned id.
    ///
    /// Ids start at [`CUSTOM_ID_START`] and increase monotonically; an id
    /// is never reused, even after the item is removed.
    pub fn add_custom(&mut self, text: impl Into<String>, category: ChecklistCategory) -> u32 {
        let id = self.next_custom_id;
        self.next_custom_id += 1;
        self.items.push(ChecklistItem {
            id,
            text: text.into(),
            category,
            status: ChecklistStatus::Select,
            origin: ItemOrigin::Custom,
        });
        id
    }

    /// Advances the item's status one step through the cycle and returns
    /// the new status.
    pub fn cycle_status(&mut self, id: u32) -> Result<ChecklistStatus, ChecklistError> {
        let item = self.get_mut(id)?;
        item.status = item.status.cycle();
        Ok(item.status)
    }

    /// Sets the item's status directly.
    pub fn set_status(&mut self, id: u32, status: ChecklistStatus) -> Result<(), ChecklistError> {
        self.get_mut(id)?.status = status;
        Ok(())
    }

    /// Removes a custom item.
    ///
    /// # Errors
    ///
    /// Returns [`ChecklistError::DefaultItemNotRemovable`] for default
    /// items and [`ChecklistError::UnknownItem`] when the id does not
    /// exist.
    pub fn remove(&mut self, id: u32) -> Result<(), ChecklistError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ChecklistError::UnknownItem(id))?;
        if self.items[index].origin == ItemOrigin::Default {
            return Err(ChecklistError::DefaultItemNotRemovable(id));
        }
        self.items.remove(index);
        Ok(())
    }

    /// Clears all custom items and resets every default item to `select`.
    pub fn reset(&mut self) {
        self.items.retain(|item| item.origin == ItemOrigin::Default);
        for item in &mut self.items {
            item.status = ChecklistStatus::Select;
        }
    }

    /// Folds all items into aggregate counts.
    pub fn stats(&self) -> ChecklistStats {
        let mut stats = ChecklistStats {
            yes: 0,
            partially: 0,
            no: 0,
            unanswered: 0,
            total: self.items.len(),
            completion_percentage: 0,
        };
        for item in &self.items {
            match item.status {
                ChecklistStatus::Yes => stats.yes += 1,
                ChecklistStatus::Partially => stats.partially += 1,
                ChecklistStatus::No => stats.no += 1,
                ChecklistStatus::Select => stats.unanswered += 1,
            }
        }
        // An empty checklist is 0% complete, not a division by zero.
        if stats.total > 0 {
            stats.completion_percentage =
                ((stats.yes * 100 + stats.total / 2) / stats.total) as u8;
        }
        stats
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut ChecklistItem, ChecklistError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ChecklistError::UnknownItem(id))
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // Status transitions
    // =========================================================================

    #[test]
    fn cycle_status_advances_one_step() {
        let mut checklist = Checklist::with_defaults();
        let id = checklist.items()[0].id;

        assert_eq!(checklist.cycle_status(id), Ok(ChecklistStatus::Yes));
        assert_eq!(checklist.cycle_status(id), Ok(ChecklistStatus::Partially));
        assert_eq!(checklist.cycle_status(id), Ok(ChecklistStatus::No));
        assert_eq!(checklist.cycle_status(id), Ok(ChecklistStatus::Select));
    }

    #[test]
    fn cycle_status_unknown_id_is_an_error() {
        let mut checklist = Checklist::with_defaults();

        assert_eq!(
            checklist.cycle_status(9999),
            Err(ChecklistError::UnknownItem(9999))
        );
    }

    // =========================================================================
    // Custom items
    // =========================================================================

    #[test]
    fn custom_ids_start_at_1000_and_increase() {
        let mut checklist = Checklist::with_defaults();

        let first = checklist.add_custom("Review ELSS funds", ChecklistCategory::Custom);
        let second = checklist.add_custom("Close idle bank account", ChecklistCategory::Custom);

        assert_eq!(first, 1000);
        assert_eq!(second, 1001);
    }

    #[test]
    fn custom_ids_are_never_reused() {
        let mut checklist = Checklist::new();

        let first = checklist.add_custom("a", ChecklistCategory::Custom);
        checklist.remove(first).unwrap();
        let second = checklist.add_custom("b", ChecklistCategory::Custom);

        assert_eq!(second, 1001);
    }

    #[test]
    fn custom_items_can_be_removed() {
        let mut checklist = Checklist::with_defaults();
        let before = checklist.items().len();

        let id = checklist.add_custom("temp", ChecklistCategory::Custom);
        checklist.remove(id).unwrap();

        assert_eq!(checklist.items().len(), before);
    }

    #[test]
    fn default_items_cannot_be_removed() {
        let mut checklist = Checklist::with_defaults();
        let id = checklist.items()[0].id;

        assert_eq!(
            checklist.remove(id),
            Err(ChecklistError::DefaultItemNotRemovable(id))
        );
    }

    #[test]
    fn removing_unknown_item_is_an_error() {
        let mut checklist = Checklist::with_defaults();

        assert_eq!(checklist.remove(4242), Err(ChecklistError::UnknownItem(4242)));
    }

    // =========================================================================
    // Reset
    // =========================================================================

    #[test]
    fn reset_drops_custom_items_and_clears_statuses() {
        let mut checklist = Checklist::with_defaults();
        let default_count = checklist.items().len();
        let first = checklist.items()[0].id;

        checklist.cycle_status(first).unwrap();
        checklist.add_custom("extra", ChecklistCategory::Custom);
        checklist.reset();

        assert_eq!(checklist.items().len(), default_count);
        assert!(
            checklist
                .items()
                .iter()
                .all(|item| item.status == ChecklistStatus::Select)
        );
    }

    // =========================================================================
    // Stats
    // =========================================================================

    #[test]
    fn stats_fold_counts_each_status() {
        let mut checklist = Checklist::new();
        let a = checklist.add_custom("a", ChecklistCategory::Custom);
        let b = checklist.add_custom("b", ChecklistCategory::Custom);
        let c = checklist.add_custom("c", ChecklistCategory::Custom);
        checklist.add_custom("d", ChecklistCategory::Custom);

        checklist.set_status(a, ChecklistStatus::Yes).unwrap();
        checklist.set_status(b, ChecklistStatus::Yes).unwrap();
        checklist.set_status(c, ChecklistStatus::Partially).unwrap();

        let stats = checklist.stats();

        assert_eq!(stats.yes, 2);
        assert_eq!(stats.partially, 1);
        assert_eq!(stats.no, 0);
        assert_eq!(stats.unanswered, 1);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completion_percentage, 50);
    }

    #[test]
    fn completion_percentage_rounds_half_up() {
        let mut checklist = Checklist::new();
        let a = checklist.add_custom("a", ChecklistCategory::Custom);
        checklist.add_custom("b", ChecklistCategory::Custom);
        checklist.add_custom("c", ChecklistCategory::Custom);

        checklist.set_status(a, ChecklistStatus::Yes).unwrap();

        // 1/3 → 33.33 → 33.
        assert_eq!(checklist.stats().completion_percentage, 33);
    }

    #[test]
    fn empty_checklist_is_zero_percent_complete() {
        let stats = Checklist::new().stats();

        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_percentage, 0);
    }
}
