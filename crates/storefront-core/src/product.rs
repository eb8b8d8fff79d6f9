use serde::{Deserialize, Serialize};

/// A sellable item from the storefront catalog document.
///
/// Field names follow the catalog JSON, which uses camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable numeric identifier. Also the de-duplication key for carts and
    /// wishlists and the final tie-break for deterministic orderings.
    pub id: u32,
    /// Opaque alternate identifier, matched byte-for-byte and never parsed.
    pub uuid: String,
    pub sku: String,
    pub name: String,
    /// URL-safe identifier, e.g. `"linen-overshirt-sand"`.
    pub slug: String,
    pub description: String,
    pub short_description: String,
    /// Current sell price. At or below `original_price` when `sale` is set.
    pub price: f64,
    pub original_price: f64,
    pub sale: bool,
    pub sale_percentage: u32,
    /// Brand id referencing the catalog's brand vocabulary.
    pub brand: String,
    /// Category ids this product belongs to; a product may appear in several.
    pub category_id: Vec<String>,
    pub tags: Vec<String>,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub thumbnails: Option<Vec<String>>,
    /// Color ids referencing the catalog's color vocabulary.
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    /// Average review rating, typically in `[0.0, 5.0]`.
    pub rating: f64,
    pub review_count: u32,
    pub stock: u32,
    pub featured: bool,
    pub new_arrival: bool,
    pub hot_sale: bool,
    pub best_seller: bool,
    pub material: String,
    pub additional_info: String,
    pub video_url: Option<String>,
    pub detailed_description: Option<DetailedDescription>,
    /// Ids of related products. Entries may reference ids missing from the
    /// collection; lookups skip those silently.
    pub related_products: Vec<u32>,
}

impl Product {
    /// Returns `true` if the product belongs to the given category id.
    #[must_use]
    pub fn in_category(&self, category_id: &str) -> bool {
        self.category_id.iter().any(|c| c == category_id)
    }

    /// Case-insensitive substring match over name, description, and tags.
    ///
    /// `term` must already be lowercased; callers lowercase once and probe
    /// many products. Brand, sku, and material are not searched. An empty
    /// term matches every product.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(term))
    }
}

/// Long-form copy shown on the product detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedDescription {
    pub products_info: String,
    pub material_used: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            id: 12,
            uuid: "d9c1a2".to_string(),
            sku: "SKU-012".to_string(),
            name: "Linen Overshirt".to_string(),
            slug: "linen-overshirt-sand".to_string(),
            description: "Breathable overshirt in washed linen.".to_string(),
            short_description: "Washed linen overshirt".to_string(),
            price: 79.0,
            original_price: 99.0,
            sale: true,
            sale_percentage: 20,
            brand: "atelier-nord".to_string(),
            category_id: vec!["men".to_string(), "outerwear".to_string()],
            tags: vec!["Summer".to_string(), "linen".to_string()],
            images: vec!["/img/overshirt-1.jpg".to_string()],
            thumbnail: "/img/overshirt-thumb.jpg".to_string(),
            thumbnails: None,
            colors: vec!["sand".to_string()],
            sizes: vec!["M".to_string(), "L".to_string()],
            rating: 4.6,
            review_count: 41,
            stock: 7,
            featured: false,
            new_arrival: true,
            hot_sale: false,
            best_seller: false,
            material: "Linen".to_string(),
            additional_info: String::new(),
            video_url: None,
            detailed_description: None,
            related_products: vec![3, 5],
        }
    }

    #[test]
    fn in_category_true_for_each_membership() {
        let product = make_product();
        assert!(product.in_category("men"));
        assert!(product.in_category("outerwear"));
    }

    #[test]
    fn in_category_false_for_unknown_id() {
        let product = make_product();
        assert!(!product.in_category("women"));
    }

    #[test]
    fn matches_search_hits_name_case_insensitively() {
        let product = make_product();
        assert!(product.matches_search("overshirt"));
        assert!(product.matches_search("linen over"));
    }

    #[test]
    fn matches_search_hits_description() {
        let product = make_product();
        assert!(product.matches_search("breathable"));
    }

    #[test]
    fn matches_search_hits_tags_case_insensitively() {
        let product = make_product();
        assert!(product.matches_search("summer"));
    }

    #[test]
    fn matches_search_ignores_brand_sku_and_material() {
        let product = make_product();
        assert!(!product.matches_search("atelier-nord"));
        assert!(!product.matches_search("sku-012"));
    }

    #[test]
    fn matches_search_empty_term_matches_everything() {
        let product = make_product();
        assert!(product.matches_search(""));
    }

    #[test]
    fn deserializes_camel_case_document_fields() {
        let json = serde_json::json!({
            "id": 3,
            "uuid": "ab12",
            "sku": "SKU-003",
            "name": "Canvas Tote",
            "slug": "canvas-tote",
            "description": "Sturdy tote.",
            "shortDescription": "Tote",
            "price": 35.0,
            "originalPrice": 35.0,
            "sale": false,
            "salePercentage": 0,
            "brand": "orbit",
            "categoryId": ["accessories"],
            "tags": ["bag"],
            "images": [],
            "thumbnail": "/img/tote.jpg",
            "colors": ["natural"],
            "sizes": [],
            "rating": 4.1,
            "reviewCount": 9,
            "stock": 22,
            "featured": false,
            "newArrival": false,
            "hotSale": false,
            "bestSeller": true,
            "material": "Canvas",
            "additionalInfo": "",
            "relatedProducts": [7, 99]
        });

        let product: Product = serde_json::from_value(json).expect("deserialization failed");
        assert_eq!(product.id, 3);
        assert_eq!(product.short_description, "Tote");
        assert_eq!(product.category_id, vec!["accessories"]);
        assert!(product.best_seller);
        assert_eq!(product.related_products, vec![7, 99]);
    }

    #[test]
    fn optional_media_fields_default_to_none_when_absent() {
        let mut json = serde_json::to_value(make_product()).expect("serialization failed");
        let obj = json.as_object_mut().expect("expected a JSON object");
        obj.remove("thumbnails");
        obj.remove("videoUrl");
        obj.remove("detailedDescription");

        let product: Product = serde_json::from_value(json).expect("deserialization failed");
        assert!(product.thumbnails.is_none());
        assert!(product.video_url.is_none());
        assert!(product.detailed_description.is_none());
    }

    #[test]
    fn detailed_description_uses_camel_case_keys() {
        let json = serde_json::json!({
            "productsInfo": "Cut from midweight linen.",
            "materialUsed": "100% linen"
        });
        let detail: DetailedDescription =
            serde_json::from_value(json).expect("deserialization failed");
        assert_eq!(detail.products_info, "Cut from midweight linen.");
        assert_eq!(detail.material_used, "100% linen");
    }
}
