//! Purchase Flow
//!
//! Item detail modal and the buy confirmation that follows it.

use crate::item::MenuItem;

/// Result of answering the buy prompt
#[derive(Debug, Clone, PartialEq)]
pub enum PurchaseOutcome {
    Purchased { item_id: u32, message: String },
    Cancelled { message: String },
}

impl PurchaseOutcome {
    pub fn message(&self) -> &str {
        match self {
            PurchaseOutcome::Purchased { message, .. } => message,
            PurchaseOutcome::Cancelled { message } => message,
        }
    }
}

/// Which item (if any) is open in the detail modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseFlow {
    selected: Option<MenuItem>,
}

impl PurchaseFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn select(&mut self, item: MenuItem) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Confirmation question for the buy button
    pub fn prompt(item: &MenuItem, currency: &str) -> String {
        format!("Do you want to buy: {} for {}{}?", item.name, currency, item.price)
    }

    /// Apply the user's answer. Confirming closes the modal; cancelling
    /// leaves it open.
    pub fn resolve(&mut self, confirmed: bool) -> Option<PurchaseOutcome> {
        let item = self.selected.as_ref()?;
        if confirmed {
            let outcome = PurchaseOutcome::Purchased {
                item_id: item.id,
                message: format!("✅ {} purchased successfully!", item.name),
            };
            log::info!("purchase confirmed: item {}", item.id);
            self.selected = None;
            Some(outcome)
        } else {
            Some(PurchaseOutcome::Cancelled {
                message: "❌ Purchase cancelled.".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tacos() -> MenuItem {
        MenuItem::new(2, "Fish Tacos", "Mexican", 10.99)
    }

    #[test]
    fn test_prompt_text() {
        assert_eq!(
            PurchaseFlow::prompt(&tacos(), "GHC"),
            "Do you want to buy: Fish Tacos for GHC10.99?"
        );
    }

    #[test]
    fn test_confirm_closes_modal() {
        let mut flow = PurchaseFlow::new();
        flow.select(tacos());
        assert!(flow.is_open());

        let outcome = flow.resolve(true).unwrap();
        assert_eq!(
            outcome,
            PurchaseOutcome::Purchased {
                item_id: 2,
                message: "✅ Fish Tacos purchased successfully!".to_string(),
            }
        );
        assert!(!flow.is_open());
    }

    #[test]
    fn test_cancel_keeps_modal_open() {
        let mut flow = PurchaseFlow::new();
        flow.select(tacos());

        let outcome = flow.resolve(false).unwrap();
        assert_eq!(outcome.message(), "❌ Purchase cancelled.");
        assert_eq!(flow.selected().map(|i| i.id), Some(2));
    }

    #[test]
    fn test_resolve_without_selection() {
        let mut flow = PurchaseFlow::new();
        assert!(flow.resolve(true).is_none());
    }

    #[test]
    fn test_close() {
        let mut flow = PurchaseFlow::new();
        flow.select(tacos());
        flow.close();
        assert!(flow.selected().is_none());
    }
}
