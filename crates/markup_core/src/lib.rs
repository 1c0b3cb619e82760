//! Schema.org JSON-LD generation for FAQ, Product, LocalBusiness and Article pages.
//!
//! Each generator maps one input record to a `serde_json::Value`, leaving absent
//! optionals as `null`. [`render`] prunes those with [`compact`], pretty-prints
//! the document and optionally wraps it in a `<script type="application/ld+json">`
//! element.
//!
//! ```
//! use markup_core::{FaqItem, RenderOptions, SchemaInput, render};
//!
//! let input = SchemaInput::Faq(vec![FaqItem {
//!     id: None,
//!     question: "Do you ship abroad?".into(),
//!     answer: "Yes, to <b>40</b> countries.".into(),
//! }]);
//! let markup = render(&input, &RenderOptions::bare()).unwrap();
//! assert!(markup.contains("\"@type\": \"FAQPage\""));
//! ```

pub mod article;
pub mod compact;
pub mod error;
pub mod faq;
pub mod local_business;
pub mod product;
pub mod render;
pub mod schema;

pub use compact::{compact, compacted};
pub use error::{MarkupError, Result};
pub use render::{
    RenderOptions, SchemaInput, SchemaKind, generate_article_schema, generate_faq_schema,
    generate_local_business_schema, generate_product_schema, render, render_or_empty,
    render_value, to_json, wrap_script,
};
pub use schema::{
    ArticleData, ArticleType, AuthorType, Availability, BusinessCategory, DiningDetails, FaqItem,
    FaqPage, GeneralDetails, HotelDetails, ItemCondition, LocalBusinessData, MedicalDetails,
    OpeningHours, PostalAddress, ProductData, ProductOffers, ProductReviews, Socials,
    TextOrNumber,
};
