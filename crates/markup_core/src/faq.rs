use crate::schema::FaqItem;
use serde_json::{Value, json};

/// Builds a `FAQPage` with one `Question` per item, in input order.
/// Blank items are kept and answers are emitted exactly as given.
pub fn faq_schema(items: &[FaqItem]) -> Value {
    let questions: Vec<Value> = items
        .iter()
        .map(|item| {
            json!({
                "@type": "Question",
                "name": item.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": item.answer
                }
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions
    })
}
