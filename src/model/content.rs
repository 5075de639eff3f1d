// Static shop copy: per-category detail text, reviews and testimonials

use super::product::Category;

pub const MAX_RATING: u8 = 5;

/// Long-form copy shown in the product detail tabs.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetails {
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub specifications: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub author: &'static str,
    pub rating: u8,
    pub date: &'static str,
    pub comment: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub rating: u8,
    pub comment: &'static str,
}

pub fn details_for(category: Category) -> ProductDetails {
    match category {
        Category::Tent => ProductDetails {
            description: "A roomy dome tent that goes up in minutes. Stays comfortable for \
                          the whole family, even through a night of rain.",
            features: &[
                "Waterproof and windproof design",
                "UV-cut coating",
                "Breathable mesh windows",
                "Storage bag included",
            ],
            specifications: &[
                ("Capacity", "4 people"),
                ("Size", "270 × 270 × 150 cm"),
                ("Weight", "5.2 kg"),
                ("Material", "Polyester (PU waterproof coating)"),
            ],
        },
        Category::Sleeping => ProductDetails {
            description: "Lofty down fill that keeps you warm on cold shoulder-season nights \
                          and packs down small.",
            features: &[
                "Water-repellent shell",
                "Full-length two-way zip",
                "Draft collar and hood",
                "Compression sack included",
            ],
            specifications: &[
                ("Comfort rating", "-5 °C"),
                ("Size", "220 × 80 cm"),
                ("Weight", "1.1 kg"),
                ("Material", "Nylon shell, 90/10 down"),
            ],
        },
        Category::Cooking => ProductDetails {
            description: "Nesting cookware built for camp kitchens. Heats evenly on a stove \
                          or over the fire.",
            features: &[
                "Nests into one pot",
                "Folding handles",
                "Non-stick coating",
                "Mesh carry bag included",
            ],
            specifications: &[
                ("Pieces", "5"),
                ("Largest pot", "2.0 L"),
                ("Weight", "0.9 kg"),
                ("Material", "Hard-anodized aluminium"),
            ],
        },
        Category::Lighting => ProductDetails {
            description: "Bright, dimmable light for the tent and the table, with a warm \
                          mode that keeps the bugs away.",
            features: &[
                "Stepless dimming",
                "Warm and daylight modes",
                "Rechargeable over USB-C",
                "Hanging hook and stand",
            ],
            specifications: &[
                ("Brightness", "1000 lm"),
                ("Runtime", "Up to 40 h"),
                ("Weight", "0.4 kg"),
                ("Water resistance", "IPX4"),
            ],
        },
    }
}

pub fn mock_reviews() -> Vec<Review> {
    vec![
        Review {
            author: "Ichiro Tanaka",
            rating: 5,
            date: "2024-01-15",
            comment: "Very easy to set up and great for family camping. \
                      Comfortable inside even in the rain.",
        },
        Review {
            author: "Hanako Suzuki",
            rating: 4,
            date: "2024-01-10",
            comment: "Plenty of space and good quality. Would be even better if it were \
                      a bit lighter.",
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Taro Yamada",
            rating: 5,
            comment: "High quality products made camping even more fun!",
        },
        Testimonial {
            author: "Hanako Sato",
            rating: 5,
            comment: "The staff were attentive, so beginners can shop with confidence.",
        },
        Testimonial {
            author: "Ichiro Suzuki",
            rating: 5,
            comment: "Fast delivery and everything arrived in perfect condition. \
                      I'll order again!",
        },
    ]
}

/// Five stars with the first `rating` filled, e.g. `★★★★☆`.
pub fn star_line(rating: u8) -> String {
    (0..MAX_RATING)
        .map(|i| if i < rating { '★' } else { '☆' })
        .collect()
}

/// Mean rating rounded to one decimal, `None` without reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = sum as f32 / reviews.len() as f32;
    Some((mean * 10.0).round() / 10.0)
}
