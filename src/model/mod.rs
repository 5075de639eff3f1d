mod content;
mod product;
mod section;

pub use content::{
    average_rating, details_for, mock_reviews, star_line, testimonials, Review, Testimonial,
};
pub use product::{default_catalog, format_yen, Category, Product};
pub use section::{default_sections, index_sections, Section};
