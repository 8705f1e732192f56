//! Dish type definitions

use serde::{Deserialize, Serialize};

/// A menu entry
///
/// There is no identity field; `name` is the de-facto key for removal, so
/// dishes sharing a name are indistinguishable for deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Dish name, intended non-empty (not enforced)
    pub name: String,
    /// Free-text course label ("Starter", "Main", "Dessert" by convention)
    pub course: String,
    /// Price; `f64::NAN` when the source text was unparseable
    pub price: f64,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Dish {
    /// Create a dish without a description
    #[must_use]
    pub fn new(name: &str, course: &str, price: f64) -> Self {
        Self {
            name: name.to_string(),
            course: course.to_string(),
            price,
            description: None,
        }
    }
}

/// Editable field of the draft dish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishField {
    Name,
    Description,
    Course,
    Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_without_empty_description() {
        let dish = Dish::new("Pizza", "Main", 12.0);
        let json = serde_json::to_string(&dish).unwrap();
        assert_eq!(json, r#"{"name":"Pizza","course":"Main","price":12.0}"#);
    }

    #[test]
    fn deserializes_with_and_without_description() {
        let with: Dish = serde_json::from_str(
            r#"{"name":"Soup","course":"Starter","price":5,"description":"of the day"}"#,
        )
        .unwrap();
        assert_eq!(with.description.as_deref(), Some("of the day"));

        let without: Dish =
            serde_json::from_str(r#"{"name":"Soup","course":"Starter","price":5}"#).unwrap();
        assert!(without.description.is_none());
        assert_eq!(without.price, 5.0);
    }
}
