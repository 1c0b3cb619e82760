use crate::compact::non_empty;
use crate::schema::{ProductData, ProductOffers};
use serde_json::{Value, json};

/// Shipping cost emitted when shipping is not free. A fixed stand-in, not a real rate.
pub const FLAT_SHIPPING_RATE: u32 = 5;

/// Return policy country; the form has no field for it.
pub const RETURN_POLICY_COUNTRY: &str = "US";

pub fn product_schema(data: &ProductData) -> Value {
    let offers = &data.offers;

    json!({
        "@context": "https://schema.org/",
        "@type": "Product",
        "name": data.name,
        "image": data.image,
        "description": data.description,
        "sku": non_empty(&data.sku),
        "brand": non_empty(&data.brand).map(|name| json!({
            "@type": "Brand",
            "name": name
        })),
        "offers": {
            "@type": "Offer",
            "priceCurrency": offers.currency,
            "price": offers.price,
            "availability": offers.availability.uri(),
            "itemCondition": offers.item_condition.uri(),
            "priceValidUntil": non_empty(&offers.price_valid_until),
            "seller": non_empty(&offers.merchant_name).map(|name| json!({
                "@type": "Organization",
                "name": name
            })),
            "merchantReturnPolicy": return_policy(offers),
            "shippingDetails": shipping_details(offers)
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": data.reviews.rating_value,
            "bestRating": "5",
            "ratingCount": data.reviews.review_count
        }
    })
}

fn return_policy(offers: &ProductOffers) -> Option<Value> {
    let days = offers.return_days.filter(|days| *days > 0)?;
    let fees = if offers.has_free_return.unwrap_or(false) {
        "https://schema.org/FreeReturn"
    } else {
        "https://schema.org/ReturnFeesCustomerResponsibility"
    };

    Some(json!({
        "@type": "MerchantReturnPolicy",
        "applicableCountry": RETURN_POLICY_COUNTRY,
        "returnPolicyCategory": "https://schema.org/MerchantReturnFiniteReturnWindow",
        "merchantReturnDays": days,
        "returnMethod": "https://schema.org/ReturnByMail",
        "returnFees": fees
    }))
}

fn shipping_details(offers: &ProductOffers) -> Option<Value> {
    let delivery_days = offers.delivery_days.filter(|days| *days > 0);
    let free_shipping = offers.has_free_shipping.unwrap_or(false);
    if delivery_days.is_none() && !free_shipping {
        return None;
    }

    let rate = if free_shipping { 0 } else { FLAT_SHIPPING_RATE };

    Some(json!({
        "@type": "OfferShippingDetails",
        "shippingRate": {
            "@type": "MonetaryAmount",
            "value": rate,
            "currency": offers.currency
        },
        "deliveryTime": delivery_days.map(|days| json!({
            "@type": "ShippingDeliveryTime",
            "handlingTime": {
                "@type": "QuantitativeValue",
                "minValue": 0,
                "maxValue": 1,
                "unitCode": "d"
            },
            "transitTime": {
                "@type": "QuantitativeValue",
                "minValue": 1,
                "maxValue": days,
                "unitCode": "d"
            }
        }))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::compacted;
    use crate::schema::{Availability, ItemCondition, ProductReviews};

    fn sample() -> ProductData {
        ProductData {
            name: "Trail Runner 2".to_string(),
            image: "https://example.com/shoe.jpg".to_string(),
            description: None,
            brand: None,
            sku: None,
            reviews: ProductReviews {
                rating_value: serde_json::Number::from_f64(4.5).unwrap_or_else(|| 4.into()),
                review_count: 100.into(),
            },
            offers: ProductOffers {
                price: "129.00".to_string(),
                currency: "USD".to_string(),
                original_price: None,
                merchant_name: None,
                availability: Availability::InStock,
                item_condition: ItemCondition::New,
                price_valid_until: None,
                has_free_return: None,
                return_days: None,
                has_free_shipping: None,
                delivery_days: None,
            },
        }
    }

    fn generate(data: &ProductData) -> Value {
        compacted(product_schema(data))
    }

    #[test]
    fn minimal_product_omits_every_optional_key() {
        let schema = generate(&sample());

        for key in ["description", "sku", "brand"] {
            assert!(schema.get(key).is_none(), "{key} should be absent");
        }
        let offers = &schema["offers"];
        for key in ["priceValidUntil", "seller", "merchantReturnPolicy", "shippingDetails"] {
            assert!(offers.get(key).is_none(), "offers.{key} should be absent");
        }
        assert_eq!(schema["@context"], "https://schema.org/");
        assert_eq!(offers["availability"], "https://schema.org/InStock");
    }

    #[test]
    fn condition_maps_to_schema_uri() {
        let mut data = sample();
        assert_eq!(generate(&data)["offers"]["itemCondition"], "https://schema.org/NewCondition");

        data.offers.item_condition = ItemCondition::Refurbished;
        assert_eq!(
            generate(&data)["offers"]["itemCondition"],
            "https://schema.org/RefurbishedCondition"
        );
    }

    #[test]
    fn brand_and_seller_nest_when_present() {
        let mut data = sample();
        data.brand = Some("Acme".to_string());
        data.offers.merchant_name = Some("Acme Store".to_string());

        let schema = generate(&data);
        assert_eq!(schema["brand"], json!({ "@type": "Brand", "name": "Acme" }));
        assert_eq!(
            schema["offers"]["seller"],
            json!({ "@type": "Organization", "name": "Acme Store" })
        );
    }

    #[test]
    fn blank_merchant_name_drops_seller() {
        let mut data = sample();
        data.offers.merchant_name = Some(String::new());
        assert!(generate(&data)["offers"].get("seller").is_none());
    }

    #[test]
    fn empty_description_is_still_emitted() {
        let mut data = sample();
        data.description = Some(String::new());
        assert_eq!(generate(&data)["description"], "");
    }

    #[test]
    fn paid_returns_charge_the_customer() {
        let mut data = sample();
        data.offers.has_free_return = Some(false);
        data.offers.return_days = Some(30);

        let policy = &generate(&data)["offers"]["merchantReturnPolicy"];
        assert_eq!(policy["returnFees"], "https://schema.org/ReturnFeesCustomerResponsibility");
        assert_eq!(policy["merchantReturnDays"], 30);
        assert_eq!(policy["applicableCountry"], "US");
        assert_eq!(policy["returnMethod"], "https://schema.org/ReturnByMail");
    }

    #[test]
    fn free_returns_are_flagged() {
        let mut data = sample();
        data.offers.has_free_return = Some(true);
        data.offers.return_days = Some(14);

        let policy = &generate(&data)["offers"]["merchantReturnPolicy"];
        assert_eq!(policy["returnFees"], "https://schema.org/FreeReturn");
    }

    #[test]
    fn zero_return_days_emit_no_policy() {
        let mut data = sample();
        data.offers.has_free_return = Some(true);
        data.offers.return_days = Some(0);
        assert!(generate(&data)["offers"].get("merchantReturnPolicy").is_none());
    }

    #[test]
    fn free_shipping_without_delivery_days_has_no_delivery_time() {
        let mut data = sample();
        data.offers.has_free_shipping = Some(true);

        let shipping = &generate(&data)["offers"]["shippingDetails"];
        assert_eq!(shipping["shippingRate"]["value"], 0);
        assert_eq!(shipping["shippingRate"]["currency"], "USD");
        assert!(shipping.get("deliveryTime").is_none());
    }

    #[test]
    fn paid_shipping_uses_flat_rate_and_transit_window() {
        let mut data = sample();
        data.offers.delivery_days = Some(4);

        let shipping = &generate(&data)["offers"]["shippingDetails"];
        assert_eq!(shipping["shippingRate"]["value"], FLAT_SHIPPING_RATE);
        assert_eq!(
            shipping["deliveryTime"]["handlingTime"],
            json!({ "@type": "QuantitativeValue", "minValue": 0, "maxValue": 1, "unitCode": "d" })
        );
        assert_eq!(shipping["deliveryTime"]["transitTime"]["minValue"], 1);
        assert_eq!(shipping["deliveryTime"]["transitTime"]["maxValue"], 4);
    }

    #[test]
    fn rating_is_always_emitted() {
        let rating = &generate(&sample())["aggregateRating"];
        assert_eq!(
            *rating,
            json!({
                "@type": "AggregateRating",
                "ratingValue": 4.5,
                "bestRating": "5",
                "ratingCount": 100
            })
        );
    }

    #[test]
    fn offer_keys_follow_assembly_order() {
        let mut data = sample();
        data.offers.merchant_name = Some("Acme".to_string());
        data.offers.return_days = Some(30);
        data.offers.has_free_shipping = Some(true);

        let schema = generate(&data);
        let keys: Vec<&str> = schema["offers"]
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(
            keys,
            vec![
                "@type",
                "priceCurrency",
                "price",
                "availability",
                "itemCondition",
                "seller",
                "merchantReturnPolicy",
                "shippingDetails"
            ]
        );
    }
}
