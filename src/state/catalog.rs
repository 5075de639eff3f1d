// Catalog state - product filtering, sorting and the detail selection
use crate::model::{Category, Product};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

/// Closed price interval in yen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    /// Keeps `min <= max` after one bound was edited, moving the other bound.
    pub fn normalize_after_min_edit(&mut self) {
        if self.min > self.max {
            self.max = self.min;
        }
    }

    pub fn normalize_after_max_edit(&mut self) {
        if self.max < self.min {
            self.min = self.max;
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Catalog order.
    #[default]
    Popularity,
    PriceLow,
    PriceHigh,
    Newest,
}

impl SortBy {
    pub const ALL: [SortBy; 4] = [
        SortBy::Popularity,
        SortBy::PriceLow,
        SortBy::PriceHigh,
        SortBy::Newest,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Popularity => "Most popular",
            SortBy::PriceLow => "Price: low to high",
            SortBy::PriceHigh => "Price: high to low",
            SortBy::Newest => "Newest",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductQuery {
    pub category: CategoryFilter,
    pub price: PriceRange,
    pub sort_by: SortBy,
}

impl ProductQuery {
    pub fn new(max_price: u32) -> Self {
        Self {
            category: CategoryFilter::All,
            price: PriceRange::new(0, max_price),
            sort_by: SortBy::Popularity,
        }
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut visible = filter_products(products, self.category, self.price);
        sort_products(&mut visible, self.sort_by);
        visible
    }
}

/// Products matching the category and price interval, in catalog order.
pub fn filter_products(
    products: &[Product],
    category: CategoryFilter,
    price: PriceRange,
) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| category.matches(p.category) && price.contains(p.price))
        .collect()
}

/// Stable sort, so ties keep catalog order.
pub fn sort_products(products: &mut [&Product], sort_by: SortBy) {
    match sort_by {
        SortBy::Popularity => {}
        SortBy::PriceLow => products.sort_by_key(|p| p.price),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortBy::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
    }
}

pub const MAX_QUANTITY: u32 = 99;
pub const RELATED_LIMIT: usize = 3;
pub const POPULAR_LIMIT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Description,
    Specifications,
    Reviews,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [
        DetailTab::Description,
        DetailTab::Specifications,
        DetailTab::Reviews,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Description => "Description",
            DetailTab::Specifications => "Specifications",
            DetailTab::Reviews => "Reviews",
        }
    }
}

/// Product opened in the detail window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductDetail {
    pub product_id: u32,
    pub quantity: u32,
    pub tab: DetailTab,
}

impl ProductDetail {
    pub fn new(product_id: u32) -> Self {
        Self {
            product_id,
            quantity: 1,
            tab: DetailTab::default(),
        }
    }

    pub fn increment(&mut self) {
        self.set_quantity(self.quantity.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, MAX_QUANTITY);
    }
}

/// Products featured on the home page: the head of the catalog.
pub fn popular_products(products: &[Product], limit: usize) -> &[Product] {
    &products[..limit.min(products.len())]
}

/// Other catalog entries to show next to a product, catalog order.
pub fn related_products(products: &[Product], product_id: u32, limit: usize) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.id != product_id)
        .take(limit)
        .collect()
}
