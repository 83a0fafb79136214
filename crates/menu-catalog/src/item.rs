//! Menu Entities

use serde::{Deserialize, Serialize};

/// A dish on the menu. Never mutated after the catalog loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier, used as the list key
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Display-only price, currency-agnostic
    pub price: f64,
    /// Category label (may have no matching filter button)
    pub category: String,
    pub emoji: String,
    /// Image path relative to the site root
    pub image: String,
}

impl MenuItem {
    pub fn new(id: u32, name: &str, category: &str, price: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            category: category.to_string(),
            emoji: String::new(),
            image: String::new(),
        }
    }

    /// Price with two decimals, e.g. `12.99`
    pub fn price_label(&self) -> String {
        format!("{:.2}", self.price)
    }
}

/// A labelled counter in the stats section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub label: String,
    pub target: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        let item = MenuItem::new(1, "Churros", "Desserts", 7.5);
        assert_eq!(item.price_label(), "7.50");
    }

    #[test]
    fn test_item_deserializes() {
        let json = r#"{"id":3,"name":"Falafel Wrap","description":"Chickpea","price":9.99,
            "category":"Middle Eastern","emoji":"🥙","image":"./img/3.jpg"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 3);
        assert_eq!(item.category, "Middle Eastern");
    }
}
