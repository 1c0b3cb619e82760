use crate::compact::non_empty;
use crate::schema::ArticleData;
use serde_json::{Value, json};

pub fn article_schema(data: &ArticleData) -> Value {
    let article_type = data.article_type.unwrap_or_default();
    let author_type = data.author_type.unwrap_or_default();
    let date_modified = non_empty(&data.date_modified).unwrap_or(data.date_published.as_str());
    let image = (!data.image.is_empty()).then(|| vec![data.image.as_str()]);

    // mainEntityOfPage stays even without a URL; only its @id drops out.
    json!({
        "@context": "https://schema.org",
        "@type": article_type.as_str(),
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": non_empty(&data.url)
        },
        "headline": data.headline,
        "description": non_empty(&data.description),
        "image": image,
        "keywords": non_empty(&data.keywords),
        "contentLocation": non_empty(&data.content_location).map(|place| json!({
            "@type": "Place",
            "name": place
        })),
        "datePublished": data.date_published,
        "dateModified": date_modified,
        "author": {
            "@type": author_type.as_str(),
            "name": data.author_name,
            "url": non_empty(&data.author_url)
        },
        "publisher": {
            "@type": "Organization",
            "name": data.publisher_name,
            "logo": non_empty(&data.publisher_logo).map(|logo| json!({
                "@type": "ImageObject",
                "url": logo
            }))
        }
    })
}
