use async_trait::async_trait;
use savor_catalog::{MenuItem, Restaurant};

use crate::CoreResult;

/// Read access to restaurants and their menus
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_restaurants(&self) -> CoreResult<Vec<Restaurant>>;

    async fn get_restaurant(&self, slug: &str) -> CoreResult<Restaurant>;

    /// Menu items of one restaurant, in display order
    async fn menu_for(&self, slug: &str) -> CoreResult<Vec<MenuItem>>;

    async fn get_menu_item(&self, id: &str) -> CoreResult<MenuItem>;
}
