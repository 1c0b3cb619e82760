use crate::article::article_schema;
use crate::compact::{compact, compacted};
use crate::error::{MarkupError, Result};
use crate::faq::faq_schema;
use crate::local_business::local_business_schema;
use crate::product::product_schema;
use crate::schema::{ArticleData, FaqItem, LocalBusinessData, ProductData};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

pub const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
pub const SCRIPT_CLOSE: &str = "</script>";

/// Output written when generation fails and the caller asked for a fallback.
pub const EMPTY_DOCUMENT: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_script_tag: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_script_tag: true,
        }
    }
}

impl RenderOptions {
    pub fn bare() -> Self {
        Self {
            include_script_tag: false,
        }
    }

    fn finish(self, json: String) -> String {
        if self.include_script_tag {
            wrap_script(&json)
        } else {
            json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Faq,
    Product,
    LocalBusiness,
    Article,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 4] = [
        SchemaKind::Faq,
        SchemaKind::Product,
        SchemaKind::LocalBusiness,
        SchemaKind::Article,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaKind::Faq => "faq",
            SchemaKind::Product => "product",
            SchemaKind::LocalBusiness => "local-business",
            SchemaKind::Article => "article",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = MarkupError;

    fn from_str(value: &str) -> Result<Self> {
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| MarkupError::UnknownSchemaKind(value.to_string()))
    }
}

/// One record for one tab.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaInput {
    Faq(Vec<FaqItem>),
    Product(ProductData),
    LocalBusiness(LocalBusinessData),
    Article(ArticleData),
}

impl SchemaInput {
    pub fn kind(&self) -> SchemaKind {
        match self {
            SchemaInput::Faq(_) => SchemaKind::Faq,
            SchemaInput::Product(_) => SchemaKind::Product,
            SchemaInput::LocalBusiness(_) => SchemaKind::LocalBusiness,
            SchemaInput::Article(_) => SchemaKind::Article,
        }
    }

    /// Assembled document before pruning.
    pub fn to_schema(&self) -> Value {
        match self {
            SchemaInput::Faq(items) => faq_schema(items),
            SchemaInput::Product(data) => product_schema(data),
            SchemaInput::LocalBusiness(data) => local_business_schema(data),
            SchemaInput::Article(data) => article_schema(data),
        }
    }
}

/// Generated and pruned document.
pub fn render_value(input: &SchemaInput) -> Value {
    debug!(kind = %input.kind(), "generating schema");
    let mut value = input.to_schema();
    compact(&mut value);
    value
}

pub fn render(input: &SchemaInput, options: &RenderOptions) -> Result<String> {
    let json = to_json(&render_value(input))?;
    Ok(options.finish(json))
}

/// Like [`render`], but degrades to an empty document instead of failing.
///
/// Serializing a `Value` does not fail with `serde_json`, so in practice the
/// `"{}"` branch is unreachable and this returns what [`render`] would.
pub fn render_or_empty(input: &SchemaInput, options: &RenderOptions) -> String {
    let json = to_json(&render_value(input)).unwrap_or_else(|err| {
        warn!(kind = %input.kind(), error = %err, "schema generation failed");
        EMPTY_DOCUMENT.to_string()
    });
    options.finish(json)
}

/// Pretty JSON with two-space indentation. Markup in strings is left as is.
pub fn to_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn wrap_script(json: &str) -> String {
    format!("{SCRIPT_OPEN}\n{json}\n{SCRIPT_CLOSE}")
}

pub fn generate_faq_schema(items: &[FaqItem]) -> Result<String> {
    to_json(&compacted(faq_schema(items)))
}

pub fn generate_product_schema(data: &ProductData) -> Result<String> {
    to_json(&compacted(product_schema(data)))
}

pub fn generate_local_business_schema(data: &LocalBusinessData) -> Result<String> {
    to_json(&compacted(local_business_schema(data)))
}

pub fn generate_article_schema(data: &ArticleData) -> Result<String> {
    to_json(&compacted(article_schema(data)))
}
