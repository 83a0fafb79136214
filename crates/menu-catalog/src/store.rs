//! Menu Catalog Store
//!
//! Holds the menu items and the active category filter. The visible
//! category row and the visible item grid are derived on every read.
//! Mutators notify subscribed observers so a view layer can re-render
//! without the store knowing anything about it.

use crate::catalog::Catalog;
use crate::item::MenuItem;

/// Filter label that matches every item (on desktop)
pub const ALL_CATEGORY: &str = "All";

/// Category buttons shown on narrow viewports. Hand-maintained, not
/// derived from the configured list.
pub const MOBILE_CATEGORIES: [&str; 4] = ["All", "Asian", "Mexican", "Desserts"];

/// Categories that "All" covers on narrow viewports
const MOBILE_ALL_SUBSET: [&str; 3] = ["Asian", "Mexican", "Desserts"];

/// Viewport width check against the mobile breakpoint (inclusive)
pub fn is_mobile_width(width: f64, breakpoint: f64) -> bool {
    width <= breakpoint
}

/// State change delivered to observers
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    ViewportChanged { is_mobile: bool },
    CategorySelected(String),
}

/// Handle returned by [`MenuCatalogStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&CatalogEvent) + Send + Sync>;

pub struct MenuCatalogStore {
    items: Vec<MenuItem>,
    categories: Vec<String>,
    active_category: String,
    is_mobile: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl MenuCatalogStore {
    pub fn new(items: Vec<MenuItem>, categories: Vec<String>) -> Self {
        Self {
            items,
            categories,
            active_category: ALL_CATEGORY.to_string(),
            is_mobile: false,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.items.clone(), catalog.categories.clone())
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Find an item by id
    pub fn item(&self, id: u32) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    // ========================
    // Mutators
    // ========================

    /// Record the viewport class. Observers fire only on change.
    pub fn set_viewport(&mut self, is_mobile: bool) {
        if self.is_mobile == is_mobile {
            return;
        }
        self.is_mobile = is_mobile;
        log::debug!("viewport changed: is_mobile={}", is_mobile);
        self.notify(&CatalogEvent::ViewportChanged { is_mobile });
    }

    /// Set the active filter. Any string is accepted, including labels
    /// with no items or no button.
    pub fn select_category(&mut self, category: &str) {
        if self.active_category == category {
            return;
        }
        self.active_category = category.to_string();
        log::debug!("category selected: {}", category);
        self.notify(&CatalogEvent::CategorySelected(category.to_string()));
    }

    // ========================
    // Derived views
    // ========================

    /// Category buttons for the current viewport
    pub fn displayed_categories(&self) -> Vec<&str> {
        if self.is_mobile {
            MOBILE_CATEGORIES.to_vec()
        } else {
            self.categories.iter().map(String::as_str).collect()
        }
    }

    /// Items visible under the active filter, in catalog order.
    /// On mobile, "All" narrows to the mobile subset.
    pub fn filtered_items(&self) -> Vec<&MenuItem> {
        if self.active_category == ALL_CATEGORY {
            if self.is_mobile {
                return self
                    .items
                    .iter()
                    .filter(|item| MOBILE_ALL_SUBSET.contains(&item.category.as_str()))
                    .collect();
            }
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| item.category == self.active_category)
            .collect()
    }

    // ========================
    // Observers
    // ========================

    pub fn subscribe(&mut self, observer: impl Fn(&CatalogEvent) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&self, event: &CatalogEvent) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn full_categories() -> Vec<String> {
        ["All", "Asian", "Mexican", "Middle Eastern", "Desserts"]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    fn scenario_store() -> MenuCatalogStore {
        let items = vec![
            MenuItem::new(1, "Noodles", "Asian", 12.99),
            MenuItem::new(2, "Fish Tacos", "Mexican", 10.99),
            MenuItem::new(3, "BBQ Pulled Pork", "American", 13.99),
        ];
        MenuCatalogStore::new(items, full_categories())
    }

    fn builtin_store() -> MenuCatalogStore {
        MenuCatalogStore::from_catalog(&Catalog::builtin().unwrap())
    }

    fn ids(items: &[&MenuItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_defaults() {
        let store = scenario_store();
        assert_eq!(store.active_category(), "All");
        assert!(!store.is_mobile());
    }

    #[test]
    fn test_desktop_categories_follow_config() {
        let store = builtin_store();
        assert_eq!(
            store.displayed_categories(),
            vec!["All", "Asian", "Mexican", "Middle Eastern", "Desserts"]
        );
    }

    #[test]
    fn test_mobile_categories_are_fixed() {
        let mut store = MenuCatalogStore::new(Vec::new(), vec!["All".to_string(), "Soup".to_string()]);
        store.set_viewport(true);
        assert_eq!(store.displayed_categories(), vec!["All", "Asian", "Mexican", "Desserts"]);
        store.select_category("Soup");
        assert_eq!(store.displayed_categories(), vec!["All", "Asian", "Mexican", "Desserts"]);
    }

    #[test]
    fn test_all_on_desktop_returns_everything() {
        let store = builtin_store();
        let all: Vec<u32> = store.items().iter().map(|i| i.id).collect();
        assert_eq!(ids(&store.filtered_items()), all);
    }

    #[test]
    fn test_all_on_mobile_keeps_subset_in_order() {
        let mut store = builtin_store();
        store.set_viewport(true);
        let visible = store.filtered_items();
        assert_eq!(ids(&visible), vec![1, 2, 5, 6, 7, 8, 9]);
        assert!(visible
            .iter()
            .all(|i| ["Asian", "Mexican", "Desserts"].contains(&i.category.as_str())));
    }

    #[test]
    fn test_concrete_category_ignores_viewport() {
        let mut store = builtin_store();
        store.select_category("Mexican");
        assert_eq!(ids(&store.filtered_items()), vec![2, 6]);
        store.set_viewport(true);
        assert_eq!(ids(&store.filtered_items()), vec![2, 6]);

        // No button on mobile, still filterable
        store.select_category("Middle Eastern");
        assert_eq!(ids(&store.filtered_items()), vec![3, 10]);
    }

    #[test]
    fn test_exact_case_sensitive_match() {
        let mut store = builtin_store();
        store.select_category("mexican");
        assert!(store.filtered_items().is_empty());
        store.select_category("Mex");
        assert!(store.filtered_items().is_empty());
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let mut store = builtin_store();
        store.select_category("NoSuchCategory");
        assert_eq!(store.active_category(), "NoSuchCategory");
        assert!(store.filtered_items().is_empty());
    }

    #[test]
    fn test_filtered_items_idempotent() {
        let mut store = builtin_store();
        store.set_viewport(true);
        let first = ids(&store.filtered_items());
        let second = ids(&store.filtered_items());
        assert_eq!(first, second);
    }

    #[test]
    fn test_scenarios() {
        let mut store = scenario_store();

        store.set_viewport(true);
        assert_eq!(ids(&store.filtered_items()), vec![1, 2]);

        store.set_viewport(false);
        assert_eq!(ids(&store.filtered_items()), vec![1, 2, 3]);

        store.select_category("American");
        assert_eq!(ids(&store.filtered_items()), vec![3]);
        store.set_viewport(true);
        assert_eq!(ids(&store.filtered_items()), vec![3]);
    }

    #[test]
    fn test_is_mobile_width() {
        assert!(is_mobile_width(320.0, 425.0));
        assert!(is_mobile_width(425.0, 425.0));
        assert!(!is_mobile_width(426.0, 425.0));
    }

    #[test]
    fn test_observers_notified_on_change() {
        let mut store = scenario_store();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        store.subscribe(move |e| sink.lock().unwrap().push(e.clone()));

        store.set_viewport(true);
        store.set_viewport(true);
        store.select_category("Asian");
        store.select_category("Asian");

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                CatalogEvent::ViewportChanged { is_mobile: true },
                CatalogEvent::CategorySelected("Asian".to_string()),
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = scenario_store();
        let count = Arc::new(Mutex::new(0));
        let sink = count.clone();
        let id = store.subscribe(move |_| *sink.lock().unwrap() += 1);

        store.select_category("Mexican");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.select_category("Asian");

        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_item_lookup() {
        let store = scenario_store();
        assert_eq!(store.item(2).map(|i| i.name.as_str()), Some("Fish Tacos"));
        assert!(store.item(99).is_none());
    }
}
