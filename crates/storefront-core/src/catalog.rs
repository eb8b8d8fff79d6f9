use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Category entry from the catalog's filter vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Product count reported by the upstream catalog, shown in the sidebar.
    pub count: u32,
}

/// Brand entry from the catalog's filter vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

/// Color swatch entry from the catalog's filter vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Color {
    pub id: String,
    pub name: String,
    /// CSS class for the swatch picker; `"class"` on the wire.
    #[serde(rename = "class")]
    pub css_class: String,
    pub hex: String,
}

/// Named price band for the filter sidebar. Bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRange {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
}

/// The complete catalog document fetched from the storefront endpoint.
///
/// The vocabularies drive the shop page's filter sidebar; `products` is the
/// full sellable collection. The document is `Clone` so editing flows can
/// work on a private copy instead of the shared cached instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub brands: Vec<Brand>,
    pub sizes: Vec<String>,
    pub colors: Vec<Color>,
    pub tags: Vec<String>,
    pub price_ranges: Vec<PriceRange>,
    pub products: Vec<Product>,
}

impl Catalog {
    /// Looks up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Looks up a brand by id.
    #[must_use]
    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id == id)
    }

    /// Looks up a color by id.
    #[must_use]
    pub fn color(&self, id: &str) -> Option<&Color> {
        self.colors.iter().find(|c| c.id == id)
    }

    /// Looks up a price range by id.
    #[must_use]
    pub fn price_range(&self, id: &str) -> Option<&PriceRange> {
        self.price_ranges.iter().find(|r| r.id == id)
    }

    /// Resolves a product's category ids against the vocabulary.
    ///
    /// Ids with no vocabulary entry are skipped, so the join may be shorter
    /// than `product.category_id` and is empty when nothing resolves.
    #[must_use]
    pub fn categories_of(&self, product: &Product) -> Vec<&Category> {
        product
            .category_id
            .iter()
            .filter_map(|id| self.category(id))
            .collect()
    }
}
