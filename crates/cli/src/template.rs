//! Starting records matching what the form shows after a tab switch.

use anyhow::Result;
use markup_core::{
    ArticleData, ArticleType, AuthorType, Availability, BusinessCategory, DiningDetails, FaqItem,
    FaqPage, ItemCondition, LocalBusinessData, OpeningHours, PostalAddress, ProductData,
    ProductOffers, ProductReviews, SchemaKind, Socials, compacted,
};
use serde_json::{Number, Value};
use time::macros::format_description;
use time::{Date, Duration};

pub fn default_record(kind: SchemaKind, today: Date) -> Result<Value> {
    let record = match kind {
        SchemaKind::Faq => serde_json::to_value(faq())?,
        SchemaKind::Product => serde_json::to_value(product(today)?)?,
        SchemaKind::LocalBusiness => serde_json::to_value(local_business())?,
        SchemaKind::Article => serde_json::to_value(article(today)?)?,
    };
    Ok(compacted(record))
}

fn faq() -> FaqPage {
    FaqPage {
        items: vec![FaqItem {
            id: Some("1".to_string()),
            question: String::new(),
            answer: String::new(),
        }],
    }
}

fn product(today: Date) -> Result<ProductData> {
    Ok(ProductData {
        name: String::new(),
        image: String::new(),
        description: None,
        brand: None,
        sku: None,
        reviews: ProductReviews {
            rating_value: Number::from_f64(4.5).unwrap_or_else(|| Number::from(4)),
            review_count: Number::from(100),
        },
        offers: ProductOffers {
            price: "0.00".to_string(),
            currency: "USD".to_string(),
            original_price: None,
            merchant_name: None,
            availability: Availability::InStock,
            item_condition: ItemCondition::New,
            price_valid_until: Some(iso_date(one_year_after(today))?),
            has_free_return: Some(false),
            return_days: None,
            has_free_shipping: Some(false),
            delivery_days: None,
        },
    })
}

fn local_business() -> LocalBusinessData {
    LocalBusinessData {
        category: BusinessCategory::Dining(DiningDetails::default()),
        business_type: Some("LocalBusiness".to_string()),
        name: String::new(),
        image: String::new(),
        image2: None,
        telephone: String::new(),
        email: Some(String::new()),
        address: PostalAddress {
            country: "US".to_string(),
            ..PostalAddress::default()
        },
        opening_hours: vec![OpeningHours {
            day_of_week: Vec::new(),
            opens: "09:00".to_string(),
            closes: "17:00".to_string(),
        }],
        same_as: Vec::new(),
        socials: Socials::default(),
        price_range: Some(String::new()),
        has_map: None,
    }
}

fn article(today: Date) -> Result<ArticleData> {
    Ok(ArticleData {
        article_type: Some(ArticleType::Article),
        headline: String::new(),
        image: String::new(),
        author_name: String::new(),
        author_type: Some(AuthorType::Person),
        author_url: None,
        publisher_name: String::new(),
        publisher_logo: None,
        date_published: iso_date(today)?,
        date_modified: None,
        url: None,
        keywords: None,
        description: None,
        content_location: None,
    })
}

/// Same calendar day next year; Feb 29 rolls forward to Mar 1.
fn one_year_after(date: Date) -> Date {
    date.replace_year(date.year() + 1)
        .unwrap_or_else(|_| date + Duration::days(366))
}

fn iso_date(date: Date) -> Result<String> {
    Ok(date.format(format_description!("[year]-[month]-[day]"))?)
}
