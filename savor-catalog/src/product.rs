use serde::{Deserialize, Serialize};

/// Menu sections shown as tabs on a restaurant page
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Appetizers,
    MainCourses,
    Desserts,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Appetizers,
        MenuCategory::MainCourses,
        MenuCategory::Desserts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Appetizers => "Appetizers",
            MenuCategory::MainCourses => "Main Courses",
            MenuCategory::Desserts => "Desserts",
        }
    }
}

/// A restaurant as listed on the browse pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub slug: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f64,
    pub delivery_time_minutes: u32,
    pub image_url: String,
}

impl Restaurant {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.slug.trim().is_empty() {
            return Err(ProductError::MissingField("slug"));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ProductError::InvalidRating {
                slug: self.slug.clone(),
                rating: self.rating,
            });
        }
        Ok(())
    }
}

/// A dish that can be added to the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_slug: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: Option<String>,
    pub category: MenuCategory,
}

impl MenuItem {
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.trim().is_empty() {
            return Err(ProductError::MissingField("id"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ProductError::InvalidPrice {
                id: self.id.clone(),
                price: self.price,
            });
        }
        Ok(())
    }
}

/// Split a menu into its tabs, keeping menu order inside each tab.
/// Empty categories are omitted.
pub fn group_by_category(items: &[MenuItem]) -> Vec<(MenuCategory, Vec<&MenuItem>)> {
    MenuCategory::ALL
        .iter()
        .filter_map(|category| {
            let section: Vec<&MenuItem> = items
                .iter()
                .filter(|item| item.category == *category)
                .collect();
            (!section.is_empty()).then_some((*category, section))
        })
        .collect()
}

/// Catalog data errors
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price {price} for menu item {id}")]
    InvalidPrice { id: String, price: f64 },

    #[error("Invalid rating {rating} for restaurant {slug}")]
    InvalidRating { slug: String, rating: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: MenuCategory) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_slug: "the-golden-spoon".to_string(),
            name: id.to_string(),
            description: String::new(),
            price: 9.0,
            image_url: None,
            category,
        }
    }

    #[test]
    fn test_group_by_category() {
        let items = vec![
            item("main1", MenuCategory::MainCourses),
            item("des1", MenuCategory::Desserts),
            item("main2", MenuCategory::MainCourses),
        ];

        let groups = group_by_category(&items);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, MenuCategory::MainCourses);
        let ids: Vec<&str> = groups[0].1.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["main1", "main2"]);
        assert_eq!(groups[1].0, MenuCategory::Desserts);
    }

    #[test]
    fn test_menu_item_validation() {
        let mut dish = item("app1", MenuCategory::Appetizers);
        assert!(dish.validate().is_ok());

        dish.price = -1.0;
        assert!(matches!(dish.validate(), Err(ProductError::InvalidPrice { .. })));

        dish.price = f64::NAN;
        assert!(dish.validate().is_err());
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&MenuCategory::MainCourses).unwrap();
        assert_eq!(json, "\"main_courses\"");
    }
}
