pub mod product;

pub use product::{group_by_category, MenuCategory, MenuItem, ProductError, Restaurant};
