//! In-memory product catalog.
//!
//! Implements the `ProductCatalog` trait from `fashionista-core` over a fixed
//! product list. `StaticCatalog::seeded()` carries the storefront's built-in
//! fashion line-up.

use fashionista_core::catalog::ProductCatalog;
use fashionista_types::error::CatalogError;
use fashionista_types::product::{Product, ProductId, ShopTheLookItem};

/// Catalog backed by a `Vec<Product>` held in memory.
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Create a catalog over the given products. Order is preserved in listings.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog preloaded with the storefront line-up.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for StaticCatalog {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, CatalogError> {
        let products = match category.map(str::trim).filter(|c| !c.is_empty()) {
            Some(category) => self
                .products
                .iter()
                .filter(|p| p.in_category(category))
                .cloned()
                .collect(),
            None => self.products.clone(),
        };
        Ok(products)
    }

    async fn get(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let mut categories: Vec<String> = Vec::new();
        for product in &self.products {
            if !categories
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&product.category))
            {
                categories.push(product.category.clone());
            }
        }
        Ok(categories)
    }
}

fn look(item_name: &str, slug: &str) -> ShopTheLookItem {
    ShopTheLookItem {
        item_name: item_name.to_string(),
        affiliate_url: format!("https://shop.fashionistapp.example/aff/{slug}"),
        image_url: format!("/images/look/{slug}.jpg"),
    }
}

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    shop_the_look: Option<Vec<ShopTheLookItem>>,
) -> Product {
    let slug = name.to_lowercase().replace(' ', "-");
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image_url: format!("/images/products/{slug}.jpg"),
        category: category.to_string(),
        shop_the_look,
    }
}

/// The built-in storefront line-up.
pub fn seed_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Silk Red Dress",
            "A long elegant silk red dress with V-neck",
            129.99,
            "Women",
            Some(vec![
                look("Gold Hoop Earrings", "gold-hoop-earrings"),
                look("Nude Strappy Heels", "nude-strappy-heels"),
            ]),
        ),
        product(
            "2",
            "Linen Summer Shirt",
            "A breezy white linen shirt with a relaxed fit",
            59.90,
            "Men",
            Some(vec![look("Straw Panama Hat", "straw-panama-hat")]),
        ),
        product(
            "3",
            "Camel Wool Coat",
            "A double-breasted camel wool coat that falls below the knee",
            249.00,
            "Women",
            None,
        ),
        product(
            "4",
            "Slim Denim Jacket",
            "A washed indigo denim jacket with brass buttons",
            89.50,
            "Men",
            None,
        ),
        product(
            "5",
            "Leather Crossbody Bag",
            "A cognac leather crossbody bag with an adjustable strap",
            119.00,
            "Accessories",
            None,
        ),
        product(
            "6",
            "Floral Midi Skirt",
            "A pleated midi skirt in a soft pastel floral print",
            74.99,
            "Women",
            Some(vec![look("White Leather Sneakers", "white-leather-sneakers")]),
        ),
        product(
            "7",
            "Charcoal Tailored Suit",
            "A two-piece charcoal suit in Italian wool with a slim cut",
            399.00,
            "Men",
            Some(vec![
                look("Silk Navy Tie", "silk-navy-tie"),
                look("Oxford Brogues", "oxford-brogues"),
            ]),
        ),
        product(
            "8",
            "Cashmere Scarf",
            "An oversized grey cashmere scarf with fringed ends",
            69.00,
            "Accessories",
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_all_preserves_order() {
        let catalog = StaticCatalog::seeded();
        let products = catalog.list(None).await.unwrap();
        assert_eq!(products.len(), catalog.len());
        assert_eq!(products[0].name, "Silk Red Dress");
    }

    #[tokio::test]
    async fn test_list_filters_case_insensitively() {
        let catalog = StaticCatalog::seeded();
        let women = catalog.list(Some("women")).await.unwrap();
        assert_eq!(women.len(), 3);
        assert!(women.iter().all(|p| p.category == "Women"));

        let blank = catalog.list(Some("  ")).await.unwrap();
        assert_eq!(blank.len(), catalog.len());

        let none = catalog.list(Some("Shoes")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_get_product() {
        let catalog = StaticCatalog::seeded();
        let dress = catalog.get(&ProductId::new("1")).await.unwrap();
        assert_eq!(dress.description, "A long elegant silk red dress with V-neck");
        assert_eq!(dress.image_url, "/images/products/silk-red-dress.jpg");
        assert_eq!(dress.shop_the_look.as_ref().map(Vec::len), Some(2));

        let err = catalog.get(&ProductId::new("404")).await.unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(ref id) if id.as_str() == "404"));
    }

    #[tokio::test]
    async fn test_categories_are_distinct_in_catalog_order() {
        let catalog = StaticCatalog::seeded();
        let categories = catalog.categories().await.unwrap();
        assert_eq!(categories, vec!["Women", "Men", "Accessories"]);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let catalog = StaticCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.categories().await.unwrap().is_empty());
    }
}
