use async_trait::async_trait;
use savor_catalog::{MenuCategory, MenuItem, Restaurant};
use savor_core::{CatalogRepository, CoreError, CoreResult};
use tracing::debug;

/// Catalog served from memory. The storefront has no backend, so this is the
/// only repository implementation.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    restaurants: Vec<Restaurant>,
    menu: Vec<MenuItem>,
}

impl InMemoryCatalog {
    /// Catalog with the demo restaurants and the Golden Spoon menu
    pub fn seeded() -> Self {
        Self {
            restaurants: seed_restaurants(),
            menu: seed_menu(),
        }
    }

    pub fn with_data(restaurants: Vec<Restaurant>, menu: Vec<MenuItem>) -> CoreResult<Self> {
        for restaurant in &restaurants {
            restaurant.validate()?;
        }
        for item in &menu {
            item.validate()?;
            if !restaurants.iter().any(|r| r.slug == item.restaurant_slug) {
                return Err(CoreError::ValidationError(format!(
                    "menu item {} references unknown restaurant {}",
                    item.id, item.restaurant_slug
                )));
            }
        }

        Ok(Self { restaurants, menu })
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_restaurants(&self) -> CoreResult<Vec<Restaurant>> {
        Ok(self.restaurants.clone())
    }

    async fn get_restaurant(&self, slug: &str) -> CoreResult<Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.slug == slug)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("restaurant {}", slug)))
    }

    async fn menu_for(&self, slug: &str) -> CoreResult<Vec<MenuItem>> {
        // Unknown slugs are an error, known restaurants may have an empty menu
        self.get_restaurant(slug).await?;

        let items: Vec<MenuItem> = self
            .menu
            .iter()
            .filter(|item| item.restaurant_slug == slug)
            .cloned()
            .collect();
        debug!(slug, count = items.len(), "menu loaded");
        Ok(items)
    }

    async fn get_menu_item(&self, id: &str) -> CoreResult<MenuItem> {
        self.menu
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("menu item {}", id)))
    }
}

fn restaurant(slug: &str, name: &str, cuisine: &str, rating: f64, minutes: u32, image_url: &str) -> Restaurant {
    Restaurant {
        slug: slug.to_string(),
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        rating,
        delivery_time_minutes: minutes,
        image_url: image_url.to_string(),
    }
}

fn seed_restaurants() -> Vec<Restaurant> {
    vec![
        restaurant("the-golden-spoon", "The Golden Spoon", "Italian", 4.7, 30,
            "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?q=80&w=800&auto=format&fit=crop"),
        restaurant("the-sushi-spot", "The Sushi Spot", "Japanese", 4.8, 25,
            "https://images.unsplash.com/photo-1579584425555-c3ce17fd4351?q=80&w=800&auto=format&fit=crop"),
        restaurant("bella-italia", "Bella Italia", "Italian", 4.6, 30,
            "https://images.unsplash.com/photo-1533777857889-4be7c70b33f7?q=80&w=800&auto=format&fit=crop"),
        restaurant("taco-fiesta", "Taco Fiesta", "Mexican", 4.5, 20,
            "https://images.unsplash.com/photo-1565299585323-151f8a0c4296?q=80&w=800&auto=format&fit=crop"),
        restaurant("burger-bliss", "Burger Bliss", "American", 4.7, 25,
            "https://images.unsplash.com/photo-1568901346375-23c9450c58cd?q=80&w=800&auto=format&fit=crop"),
        restaurant("curry-kingdom", "Curry Kingdom", "Indian", 4.9, 35,
            "https://images.unsplash.com/photo-1589302168068-964664d93dc0?q=80&w=800&auto=format&fit=crop"),
        restaurant("pho-nomenal", "Pho-nomenal", "Vietnamese", 4.6, 30,
            "https://images.unsplash.com/photo-1585102987345-a74c11435219?q=80&w=800&auto=format&fit=crop"),
    ]
}

fn dish(id: &str, name: &str, description: &str, price: f64, category: MenuCategory, image_url: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        restaurant_slug: "the-golden-spoon".to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: Some(image_url.to_string()),
        category,
    }
}

fn seed_menu() -> Vec<MenuItem> {
    vec![
        dish("app1", "Bruschetta",
            "Toasted bread with fresh tomatoes, garlic, basil, and olive oil.",
            8.99, MenuCategory::Appetizers,
            "https://images.unsplash.com/photo-1505253716362-afb74bf60d44?q=80&w=800&auto=format&fit=crop"),
        dish("app2", "Garlic Knots",
            "Soft, buttery garlic knots served with a side of marinara sauce.",
            6.50, MenuCategory::Appetizers,
            "https://images.unsplash.com/photo-1627308595186-e6bb3673e864?q=80&w=800&auto=format&fit=crop"),
        dish("main1", "Spaghetti Carbonara",
            "Classic pasta with pancetta, egg, Parmesan cheese, and black pepper.",
            16.99, MenuCategory::MainCourses,
            "https://images.unsplash.com/photo-1608796395892-43d738a6a12b?q=80&w=800&auto=format&fit=crop"),
        dish("main2", "Margherita Pizza",
            "Simple yet delicious pizza with tomato sauce, fresh mozzarella, and basil.",
            14.50, MenuCategory::MainCourses,
            "https://images.unsplash.com/photo-1598021680133-eb3a160ddd34?q=80&w=800&auto=format&fit=crop"),
        dish("main3", "Chicken Parmesan",
            "Breaded chicken breast topped with marinara and melted mozzarella, served with pasta.",
            18.00, MenuCategory::MainCourses,
            "https://images.unsplash.com/photo-1632778149955-e83f8ce9e324?q=80&w=800&auto=format&fit=crop"),
        dish("des1", "Tiramisu",
            "Ladyfingers dipped in coffee, layered with whipped eggs, sugar, and mascarpone cheese.",
            9.00, MenuCategory::Desserts,
            "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?q=80&w=800&auto=format&fit=crop"),
    ]
}
