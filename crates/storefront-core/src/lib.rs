pub mod catalog;
pub mod product;

pub use catalog::{Brand, Catalog, Category, Color, PriceRange};
pub use product::{DetailedDescription, Product};
