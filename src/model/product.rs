// Product catalog - static mock data for the shop page

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Tent,
    Sleeping,
    Cooking,
    Lighting,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tent,
        Category::Sleeping,
        Category::Cooking,
        Category::Lighting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Tent => "Tents",
            Category::Sleeping => "Sleeping Bags",
            Category::Cooking => "Cookware",
            Category::Lighting => "Lanterns",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Price in whole yen.
    pub price: u32,
    pub image: String,
    pub category: Category,
}

impl Product {
    pub fn new(id: u32, name: &str, price: u32, image: &str, category: Category) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            image: image.to_string(),
            category,
        }
    }

    pub fn display_price(&self) -> String {
        format_yen(self.price)
    }
}

/// Formats a yen amount with thousands separators, e.g. `¥32,800`.
pub fn format_yen(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('¥');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn default_catalog() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Outdoor Dome Tent (4 person)",
            32800,
            "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?w=400",
            Category::Tent,
        ),
        Product::new(
            2,
            "Premium Down Sleeping Bag",
            18900,
            "https://images.unsplash.com/photo-1510312305653-8ed496efae75?w=400",
            Category::Sleeping,
        ),
        Product::new(
            3,
            "Portable Gas Burner",
            8500,
            "https://images.unsplash.com/photo-1598764557991-b9f211b73b81?w=400",
            Category::Cooking,
        ),
        Product::new(
            4,
            "Rechargeable LED Lantern",
            4800,
            "https://images.unsplash.com/photo-1508497162170-609ae5c35a32?w=400",
            Category::Lighting,
        ),
        Product::new(
            5,
            "Pop-up Tent (2 person)",
            15800,
            "https://images.unsplash.com/photo-1537905569824-f89f14cceb68?w=400",
            Category::Tent,
        ),
        Product::new(
            6,
            "Three-Season Sleeping Bag",
            12800,
            "https://images.unsplash.com/photo-1520095972714-909e91b038e5?w=400",
            Category::Sleeping,
        ),
        Product::new(
            7,
            "Camp Cooker Set",
            6800,
            "https://images.unsplash.com/photo-1550830820-4040ed85d926?w=400",
            Category::Cooking,
        ),
        Product::new(
            8,
            "Solar Lantern",
            3500,
            "https://images.unsplash.com/photo-1574482620811-1aa16ffe3c82?w=400",
            Category::Lighting,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(800), "¥800");
        assert_eq!(format_yen(4800), "¥4,800");
        assert_eq!(format_yen(32800), "¥32,800");
        assert_eq!(format_yen(1234567), "¥1,234,567");
    }

    #[test]
    fn test_default_catalog_order() {
        let catalog = default_catalog();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(catalog[0].category, Category::Tent);
        assert_eq!(catalog[3].price, 4800);
    }
}
