use crate::compact::non_empty;
use crate::schema::{
    BusinessCategory, DiningDetails, GeneralDetails, HotelDetails, LocalBusinessData,
    MedicalDetails, TextOrNumber,
};
use serde_json::{Map, Value, json};
use tracing::debug;

const DEFAULT_TYPE: &str = "LocalBusiness";

/// General subtypes that get a price range even when the form left it blank.
const PRICED_SUBTYPES: [&str; 2] = ["Store", "AutomotiveBusiness"];

const DEFAULT_PRICE_RANGE: &str = "$$";

/// Review count used for a hotel guest rating given without one.
const DEFAULT_HOTEL_REVIEW_COUNT: &str = "100";

const BOOKING_PLATFORMS: [&str; 3] = [
    "http://schema.org/DesktopWebPlatform",
    "http://schema.org/IOSPlatform",
    "http://schema.org/AndroidPlatform",
];

pub fn local_business_schema(data: &LocalBusinessData) -> Value {
    let (schema_type, additional) = category_props(data);
    debug!(category = %data.category, schema_type = %schema_type, "dispatched business category");

    let opening_hours: Vec<Value> = data
        .opening_hours
        .iter()
        .map(|hours| {
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": hours.day_of_week,
                "opens": hours.opens,
                "closes": hours.closes
            })
        })
        .collect();

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": schema_type,
        "name": data.name,
        "image": image_value(data),
        "telephone": data.telephone,
        "email": non_empty(&data.email),
        "address": {
            "@type": "PostalAddress",
            "streetAddress": data.address.street,
            "addressLocality": data.address.city,
            "postalCode": data.address.zip,
            "addressCountry": data.address.country
        },
        "openingHoursSpecification": opening_hours,
        "priceRange": non_empty(&data.price_range),
        "hasMap": non_empty(&data.has_map),
        "sameAs": Some(same_as_links(data)).filter(|links| !links.is_empty())
    });

    // Category props win over base keys but keep the base key's position.
    if let Value::Object(base) = &mut schema {
        base.extend(additional);
    }
    schema
}

/// Picks the `@type` for the category and collects the properties only it emits.
pub fn category_props(data: &LocalBusinessData) -> (String, Map<String, Value>) {
    match &data.category {
        BusinessCategory::Dining(details) => ("Restaurant".to_string(), dining_props(details)),
        BusinessCategory::Medical(details) => {
            ("MedicalBusiness".to_string(), medical_props(data, details))
        }
        BusinessCategory::Hotel(details) => ("Hotel".to_string(), hotel_props(details)),
        BusinessCategory::General(details) => general_props(data, details),
        BusinessCategory::Other => (
            non_empty(&data.business_type)
                .unwrap_or(DEFAULT_TYPE)
                .to_string(),
            Map::new(),
        ),
    }
}

fn dining_props(details: &DiningDetails) -> Map<String, Value> {
    let mut props = Map::new();
    if let Some(cuisine) = non_empty(&details.cuisine) {
        props.insert("servesCuisine".into(), cuisine.into());
    }
    if let Some(menu) = non_empty(&details.menu_url) {
        props.insert("menu".into(), menu.into());
    }
    if let Some(accepts) = details.accepts_reservations {
        props.insert("acceptsReservations".into(), accepts.into());
    }
    props
}

fn medical_props(data: &LocalBusinessData, details: &MedicalDetails) -> Map<String, Value> {
    let mut props = Map::new();
    if let Some(specialty) = non_empty(&details.medical_specialty) {
        props.insert(
            "medicalSpecialty".into(),
            json!({ "@type": "MedicalSpecialty", "name": specialty }),
        );
    }
    // Booking link rides along in sameAs after the profile links.
    if let Some(appointment) = non_empty(&details.appointment_url) {
        let mut links = same_as_links(data);
        links.push(appointment);
        props.insert("sameAs".into(), json!(links));
    }
    props
}

fn hotel_props(details: &HotelDetails) -> Map<String, Value> {
    let mut props = Map::new();

    // Output starRating is the official class; the input starRating is the guest score.
    if let Some(class) = details.hotel_class.as_ref().and_then(TextOrNumber::to_value) {
        props.insert(
            "starRating".into(),
            json!({ "@type": "Rating", "ratingValue": class }),
        );
    }
    if let Some(guest_rating) = details.star_rating.as_ref().and_then(TextOrNumber::to_value) {
        props.insert(
            "aggregateRating".into(),
            json!({
                "@type": "AggregateRating",
                "ratingValue": guest_rating,
                "reviewCount": details
                    .review_count
                    .as_ref()
                    .and_then(TextOrNumber::to_value)
                    .unwrap_or_else(|| DEFAULT_HOTEL_REVIEW_COUNT.into())
            }),
        );
    }
    if let Some(min_price) = details.min_price.as_ref().and_then(TextOrNumber::to_value) {
        props.insert("priceRange".into(), min_price);
    }
    if let Some(amenities) = non_empty(&details.amenities) {
        let features: Vec<Value> = amenities
            .split(',')
            .map(|amenity| {
                json!({
                    "@type": "LocationFeatureSpecification",
                    "name": amenity.trim(),
                    "value": true
                })
            })
            .collect();
        props.insert("amenityFeature".into(), features.into());
    }
    if let Some(booking_url) = non_empty(&details.booking_url) {
        props.insert(
            "potentialAction".into(),
            json!({
                "@type": "ReserveAction",
                "target": {
                    "@type": "EntryPoint",
                    "urlTemplate": booking_url,
                    "inLanguage": "en-US",
                    "actionPlatform": BOOKING_PLATFORMS
                },
                "result": {
                    "@type": "LodgingReservation",
                    "name": "Book a room"
                }
            }),
        );
    }
    if let Some(checkin) = non_empty(&details.checkin_time) {
        props.insert("checkinTime".into(), checkin.into());
    }
    props
}

fn general_props(
    data: &LocalBusinessData,
    details: &GeneralDetails,
) -> (String, Map<String, Value>) {
    let subtype = non_empty(&data.business_type);
    let mut props = Map::new();
    if let Some(description) = non_empty(&details.description) {
        props.insert("description".into(), description.into());
    }
    if let Some(hours) = non_empty(&details.opening_hours_string) {
        props.insert("openingHours".into(), hours.into());
    }
    if subtype.is_some_and(|name| PRICED_SUBTYPES.contains(&name)) {
        let range = non_empty(&data.price_range).unwrap_or(DEFAULT_PRICE_RANGE);
        props.insert("priceRange".into(), range.into());
    }
    (subtype.unwrap_or(DEFAULT_TYPE).to_string(), props)
}

/// A lone image stays a string; a second image turns it into a list.
fn image_value(data: &LocalBusinessData) -> Value {
    match non_empty(&data.image2) {
        Some(second) => [data.image.as_str(), second]
            .into_iter()
            .filter(|image| !image.is_empty())
            .collect::<Vec<_>>()
            .into(),
        None => data.image.as_str().into(),
    }
}

/// Manual links first, then the social profiles, blanks dropped.
fn same_as_links(data: &LocalBusinessData) -> Vec<&str> {
    data.same_as
        .iter()
        .map(String::as_str)
        .chain(data.socials.links().into_iter().filter_map(|link| link.as_deref()))
        .filter(|link| !link.is_empty())
        .collect()
}
