use serde::{Deserialize, Serialize};

use storefront_core::Product;

/// Inclusive price band: products with `min <= price <= max` pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

/// Shop-page filter criteria.
///
/// Every field is optional, and an unset field does not constrain: `None`,
/// an empty list, and a blank search string all mean "match everything".
/// Set criteria combine with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilters {
    pub categories: Option<Vec<String>>,
    pub brands: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub price_range: Option<PriceBounds>,
    pub search: Option<String>,
    pub sale: Option<bool>,
    pub featured: Option<bool>,
    pub new_arrival: Option<bool>,
    pub hot_sale: Option<bool>,
    pub best_seller: Option<bool>,
}

impl ProductFilters {
    /// Returns `true` when no criterion is set and filtering would be the
    /// identity.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        set_list(&self.categories).is_none()
            && set_list(&self.brands).is_none()
            && set_list(&self.sizes).is_none()
            && set_list(&self.colors).is_none()
            && set_list(&self.tags).is_none()
            && self.price_range.is_none()
            && set_search(&self.search).is_none()
            && self.sale.is_none()
            && self.featured.is_none()
            && self.new_arrival.is_none()
            && self.hot_sale.is_none()
            && self.best_seller.is_none()
    }
}

/// A list criterion counts as set only when it has at least one entry.
fn set_list(list: &Option<Vec<String>>) -> Option<&[String]> {
    list.as_deref().filter(|entries| !entries.is_empty())
}

/// A search criterion counts as set only when it has non-whitespace
/// content; a set term is matched verbatim, padding included.
fn set_search(search: &Option<String>) -> Option<&str> {
    search.as_deref().filter(|term| !term.trim().is_empty())
}

/// Applies every set criterion in `filters` to `products`, AND-composed,
/// preserving the input order of the survivors.
///
/// List criteria match any: a product passes `categories` when it belongs
/// to at least one requested id, and likewise for sizes, colors, and tags.
/// `brands` tests the product's single brand id. The price band is
/// inclusive on both ends, and each boolean flag criterion is an equality
/// test.
#[must_use]
pub fn filter_products(products: &[Product], filters: &ProductFilters) -> Vec<Product> {
    let search = set_search(&filters.search).map(str::to_lowercase);
    products
        .iter()
        .filter(|p| matches_filters(p, filters, search.as_deref()))
        .cloned()
        .collect()
}

fn matches_filters(product: &Product, filters: &ProductFilters, search: Option<&str>) -> bool {
    if let Some(categories) = set_list(&filters.categories) {
        if !categories.iter().any(|c| product.in_category(c)) {
            return false;
        }
    }
    if let Some(brands) = set_list(&filters.brands) {
        if !brands.iter().any(|b| *b == product.brand) {
            return false;
        }
    }
    if let Some(sizes) = set_list(&filters.sizes) {
        if !sizes.iter().any(|s| product.sizes.contains(s)) {
            return false;
        }
    }
    if let Some(colors) = set_list(&filters.colors) {
        if !colors.iter().any(|c| product.colors.contains(c)) {
            return false;
        }
    }
    if let Some(tags) = set_list(&filters.tags) {
        if !tags.iter().any(|t| product.tags.contains(t)) {
            return false;
        }
    }
    if let Some(bounds) = filters.price_range {
        if product.price < bounds.min || product.price > bounds.max {
            return false;
        }
    }
    if let Some(term) = search {
        if !product.matches_search(term) {
            return false;
        }
    }
    if let Some(sale) = filters.sale {
        if product.sale != sale {
            return false;
        }
    }
    if let Some(featured) = filters.featured {
        if product.featured != featured {
            return false;
        }
    }
    if let Some(new_arrival) = filters.new_arrival {
        if product.new_arrival != new_arrival {
            return false;
        }
    }
    if let Some(hot_sale) = filters.hot_sale {
        if product.hot_sale != hot_sale {
            return false;
        }
    }
    if let Some(best_seller) = filters.best_seller {
        if product.best_seller != best_seller {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, name: &str) -> Product {
        Product {
            id,
            uuid: format!("u-{id}"),
            sku: format!("SKU-{id:03}"),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: format!("{name} description"),
            short_description: name.to_string(),
            price: 20.0,
            original_price: 20.0,
            sale: false,
            sale_percentage: 0,
            brand: "acme".to_string(),
            category_id: vec!["men".to_string()],
            tags: Vec::new(),
            images: Vec::new(),
            thumbnail: String::new(),
            thumbnails: None,
            colors: Vec::new(),
            sizes: Vec::new(),
            rating: 4.0,
            review_count: 0,
            stock: 10,
            featured: false,
            new_arrival: false,
            hot_sale: false,
            best_seller: false,
            material: "cotton".to_string(),
            additional_info: String::new(),
            video_url: None,
            detailed_description: None,
            related_products: Vec::new(),
        }
    }

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    fn strings(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn all_unset_criteria_are_the_identity() {
        let products = vec![product(1, "A"), product(2, "B"), product(3, "C")];
        let filtered = filter_products(&products, &ProductFilters::default());
        assert_eq!(ids(&filtered), vec![1, 2, 3]);
    }

    #[test]
    fn empty_lists_and_blank_search_do_not_constrain() {
        let products = vec![product(1, "A"), product(2, "B")];
        let filters = ProductFilters {
            categories: Some(Vec::new()),
            brands: Some(Vec::new()),
            tags: Some(Vec::new()),
            search: Some("   ".to_string()),
            ..ProductFilters::default()
        };
        assert!(filters.is_empty());
        assert_eq!(ids(&filter_products(&products, &filters)), vec![1, 2]);
    }

    #[test]
    fn categories_match_any_requested_membership() {
        let mut scarf = product(2, "Scarf");
        scarf.category_id = vec!["accessories".to_string()];
        let mut boots = product(3, "Boots");
        boots.category_id = vec!["shoes".to_string()];
        let products = vec![product(1, "Shirt"), scarf, boots];

        let filters = ProductFilters {
            categories: strings(&["accessories", "shoes"]),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &filters)), vec![2, 3]);
    }

    #[test]
    fn brands_filter_on_the_products_single_brand() {
        let mut tote = product(2, "Tote");
        tote.brand = "orbit".to_string();
        let products = vec![product(1, "Shirt"), tote];

        let filters = ProductFilters {
            brands: strings(&["orbit"]),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &filters)), vec![2]);
    }

    #[test]
    fn sizes_and_colors_match_on_overlap() {
        let mut shirt = product(1, "Shirt");
        shirt.sizes = vec!["S".to_string(), "M".to_string()];
        shirt.colors = vec!["black".to_string()];
        let mut jacket = product(2, "Jacket");
        jacket.sizes = vec!["L".to_string()];
        jacket.colors = vec!["navy".to_string()];
        let products = vec![shirt, jacket];

        let by_size = ProductFilters {
            sizes: strings(&["M", "XL"]),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &by_size)), vec![1]);

        let by_color = ProductFilters {
            colors: strings(&["navy"]),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &by_color)), vec![2]);
    }

    #[test]
    fn tags_match_any_requested_tag() {
        let mut shirt = product(1, "Shirt");
        shirt.tags = vec!["summer".to_string()];
        let mut jacket = product(2, "Jacket");
        jacket.tags = vec!["winter".to_string()];
        let products = vec![shirt, jacket];

        let filters = ProductFilters {
            tags: strings(&["summer", "linen"]),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &filters)), vec![1]);
    }

    #[test]
    fn price_range_is_inclusive_on_both_ends() {
        let mut cheap = product(1, "Cheap");
        cheap.price = 10.0;
        let mut exact_low = product(2, "Low");
        exact_low.price = 20.0;
        let mut exact_high = product(3, "High");
        exact_high.price = 50.0;
        let mut pricey = product(4, "Pricey");
        pricey.price = 50.01;
        let products = vec![cheap, exact_low, exact_high, pricey];

        let filters = ProductFilters {
            price_range: Some(PriceBounds {
                min: 20.0,
                max: 50.0,
            }),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &filters)), vec![2, 3]);
    }

    #[test]
    fn search_covers_name_description_and_tags() {
        let mut tote = product(2, "Canvas Tote");
        tote.tags = vec!["Summer".to_string()];
        let products = vec![product(1, "Linen Shirt"), tote];

        let by_name = ProductFilters {
            search: Some("LINEN".to_string()),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &by_name)), vec![1]);

        let by_tag = ProductFilters {
            search: Some("summer".to_string()),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &by_tag)), vec![2]);
    }

    #[test]
    fn padded_search_terms_are_matched_verbatim() {
        let products = vec![product(1, "Linen Shirt"), product(2, "Canvas Tote")];

        // "linen" only ever starts a field, so the padded term finds nothing.
        let padded = ProductFilters {
            search: Some(" linen ".to_string()),
            ..ProductFilters::default()
        };
        assert!(filter_products(&products, &padded).is_empty());

        // Padding still matches where the text really contains it.
        let interior = ProductFilters {
            search: Some(" shirt".to_string()),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &interior)), vec![1]);
    }

    #[test]
    fn boolean_flags_filter_by_equality() {
        let mut on_sale = product(1, "Sale item");
        on_sale.sale = true;
        let regular = product(2, "Regular item");
        let products = vec![on_sale, regular];

        let only_sale = ProductFilters {
            sale: Some(true),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &only_sale)), vec![1]);

        // Some(false) is a real constraint, not "unset".
        let only_regular = ProductFilters {
            sale: Some(false),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &only_regular)), vec![2]);
    }

    #[test]
    fn criteria_compose_with_logical_and() {
        let mut match_both = product(1, "Linen Shirt");
        match_both.sale = true;
        match_both.category_id = vec!["men".to_string()];
        let mut wrong_category = product(2, "Linen Throw");
        wrong_category.sale = true;
        wrong_category.category_id = vec!["home".to_string()];
        let mut not_on_sale = product(3, "Linen Blazer");
        not_on_sale.category_id = vec!["men".to_string()];
        let products = vec![match_both, wrong_category, not_on_sale];

        let filters = ProductFilters {
            categories: strings(&["men"]),
            search: Some("linen".to_string()),
            sale: Some(true),
            ..ProductFilters::default()
        };
        assert_eq!(ids(&filter_products(&products, &filters)), vec![1]);
    }

    #[test]
    fn filters_deserialize_from_camel_case_with_absent_fields_unset() {
        let filters: ProductFilters = serde_json::from_str(
            r#"{"priceRange": {"min": 10.0, "max": 40.0}, "newArrival": true}"#,
        )
        .expect("deserialization failed");
        assert_eq!(
            filters.price_range,
            Some(PriceBounds {
                min: 10.0,
                max: 40.0
            })
        );
        assert_eq!(filters.new_arrival, Some(true));
        assert!(filters.categories.is_none());
        assert!(!filters.is_empty());
    }
}
