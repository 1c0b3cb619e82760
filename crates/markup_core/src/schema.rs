use crate::error::{MarkupError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FaqItem {
    #[serde(default)]
    pub id: Option<String>, // form-layer row key, never emitted
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String, // may carry HTML; passed through untouched
}

/// FAQ form state as the form layer holds it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FaqPage {
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: String,
    pub image: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub reviews: ProductReviews,
    pub offers: ProductOffers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviews {
    pub rating_value: Number, // kept as given: 4 stays 4, 4.5 stays 4.5
    pub review_count: Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductOffers {
    pub price: String,
    pub currency: String,
    pub original_price: Option<String>, // preview only
    pub merchant_name: Option<String>,
    pub availability: Availability,
    pub item_condition: ItemCondition,
    pub price_valid_until: Option<String>,
    pub has_free_return: Option<bool>,
    pub return_days: Option<u32>,
    pub has_free_shipping: Option<bool>,
    pub delivery_days: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String")]
pub enum Availability {
    #[default]
    InStock,
    OutOfStock,
    PreOrder,
}

impl Availability {
    pub fn as_str(self) -> &'static str {
        match self {
            Availability::InStock => "InStock",
            Availability::OutOfStock => "OutOfStock",
            Availability::PreOrder => "PreOrder",
        }
    }

    pub fn uri(self) -> &'static str {
        match self {
            Availability::InStock => "https://schema.org/InStock",
            Availability::OutOfStock => "https://schema.org/OutOfStock",
            Availability::PreOrder => "https://schema.org/PreOrder",
        }
    }
}

impl FromStr for Availability {
    type Err = MarkupError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "InStock" => Ok(Availability::InStock),
            "OutOfStock" => Ok(Availability::OutOfStock),
            "PreOrder" => Ok(Availability::PreOrder),
            _ => Err(MarkupError::UnknownAvailability(value.to_string())),
        }
    }
}

impl TryFrom<String> for Availability {
    type Error = MarkupError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String")]
pub enum ItemCondition {
    #[default]
    New,
    Used,
    Refurbished,
}

impl ItemCondition {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemCondition::New => "New",
            ItemCondition::Used => "Used",
            ItemCondition::Refurbished => "Refurbished",
        }
    }

    pub fn uri(self) -> &'static str {
        match self {
            ItemCondition::New => "https://schema.org/NewCondition",
            ItemCondition::Used => "https://schema.org/UsedCondition",
            ItemCondition::Refurbished => "https://schema.org/RefurbishedCondition",
        }
    }
}

impl FromStr for ItemCondition {
    type Err = MarkupError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "New" => Ok(ItemCondition::New),
            "Used" => Ok(ItemCondition::Used),
            "Refurbished" => Ok(ItemCondition::Refurbished),
            _ => Err(MarkupError::UnknownItemCondition(value.to_string())),
        }
    }
}

impl TryFrom<String> for ItemCondition {
    type Error = MarkupError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusinessData {
    #[serde(flatten)]
    pub category: BusinessCategory,
    #[serde(rename = "type")]
    pub business_type: Option<String>, // e.g. "LocalBusiness", "Store"
    pub name: String,
    pub image: String,
    pub image2: Option<String>,
    #[serde(default)]
    pub telephone: String,
    pub email: Option<String>,
    #[serde(default)]
    pub address: PostalAddress,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Vec<String>>")]
    pub same_as: Vec<String>, // manual links, kept ahead of the social profiles
    #[serde(default, deserialize_with = "null_as_default")]
    #[schemars(with = "Option<Socials>")]
    pub socials: Socials,
    pub price_range: Option<String>,
    pub has_map: Option<String>, // maps URL
}

/// Category discriminator plus the fields only that category reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "category")]
pub enum BusinessCategory {
    General(GeneralDetails),
    Dining(DiningDetails),
    Medical(MedicalDetails),
    Hotel(HotelDetails),
    #[serde(other)]
    Other,
}

impl BusinessCategory {
    pub fn name(&self) -> &'static str {
        match self {
            BusinessCategory::General(_) => "General",
            BusinessCategory::Dining(_) => "Dining",
            BusinessCategory::Medical(_) => "Medical",
            BusinessCategory::Hotel(_) => "Hotel",
            BusinessCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneralDetails {
    pub description: Option<String>,
    pub opening_hours_string: Option<String>, // e.g. "Mo-Fr 09:00-17:00"
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiningDetails {
    pub cuisine: Option<String>,
    pub service_options: Option<String>, // preview only
    pub menu_url: Option<String>,
    pub accepts_reservations: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalDetails {
    pub medical_specialty: Option<String>,
    pub appointment_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetails {
    pub star_rating: Option<TextOrNumber>, // guest rating, emitted as aggregateRating
    pub review_count: Option<TextOrNumber>,
    pub hotel_class: Option<TextOrNumber>, // official class, emitted as starRating
    pub min_price: Option<TextOrNumber>,
    pub amenities: Option<String>,    // comma separated
    pub booking_url: Option<String>,
    pub checkin_time: Option<String>,
}

/// Rating or price field that the form may hold as text or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(Number),
}

impl TextOrNumber {
    /// The value as given; blank text and zero count as unset.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            TextOrNumber::Text(text) if text.is_empty() => None,
            TextOrNumber::Text(text) => Some(Value::String(text.clone())),
            TextOrNumber::Number(number) if number.as_f64() == Some(0.0) => None,
            TextOrNumber::Number(number) => Some(Value::Number(number.clone())),
        }
    }
}

impl From<&str> for TextOrNumber {
    fn from(text: &str) -> Self {
        TextOrNumber::Text(text.to_string())
    }
}

impl From<u32> for TextOrNumber {
    fn from(number: u32) -> Self {
        TextOrNumber::Number(number.into())
    }
}

/// Explicit `null` reads as the field's default, same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PostalAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default)]
    pub day_of_week: Vec<String>,
    pub opens: String,  // "HH:MM"
    pub closes: String, // "HH:MM"
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Socials {
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub twitter: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
}

impl Socials {
    /// Profile links in emission order.
    pub fn links(&self) -> [&Option<String>; 5] {
        [
            &self.facebook,
            &self.instagram,
            &self.twitter,
            &self.youtube,
            &self.linkedin,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    #[serde(rename = "type")]
    pub article_type: Option<ArticleType>,
    pub headline: String,
    #[serde(default)]
    pub image: String,
    pub author_name: String,
    pub author_type: Option<AuthorType>,
    pub author_url: Option<String>,
    pub publisher_name: String,
    pub publisher_logo: Option<String>,
    pub date_published: String, // YYYY-MM-DD
    pub date_modified: Option<String>,
    pub url: Option<String>, // canonical URL
    pub keywords: Option<String>, // comma separated
    pub description: Option<String>,
    pub content_location: Option<String>, // dateline, meaningful for NewsArticle
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String")]
pub enum ArticleType {
    #[default]
    Article,
    NewsArticle,
    BlogPosting,
}

impl ArticleType {
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleType::Article => "Article",
            ArticleType::NewsArticle => "NewsArticle",
            ArticleType::BlogPosting => "BlogPosting",
        }
    }
}

impl FromStr for ArticleType {
    type Err = MarkupError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "Article" => Ok(ArticleType::Article),
            "NewsArticle" => Ok(ArticleType::NewsArticle),
            "BlogPosting" => Ok(ArticleType::BlogPosting),
            _ => Err(MarkupError::UnknownArticleType(value.to_string())),
        }
    }
}

impl TryFrom<String> for ArticleType {
    type Error = MarkupError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String")]
pub enum AuthorType {
    #[default]
    Person,
    Organization,
}

impl AuthorType {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthorType::Person => "Person",
            AuthorType::Organization => "Organization",
        }
    }
}

impl FromStr for AuthorType {
    type Err = MarkupError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "Person" => Ok(AuthorType::Person),
            "Organization" => Ok(AuthorType::Organization),
            _ => Err(MarkupError::UnknownAuthorType(value.to_string())),
        }
    }
}

impl TryFrom<String> for AuthorType {
    type Error = MarkupError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for BusinessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
