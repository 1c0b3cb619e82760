use anyhow::{Context, Result, bail};
use markup_core::{FaqItem, FaqPage, SchemaInput, SchemaKind};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("yaml" | "yml") => Ok(Format::Yaml),
            Some("toml") => Ok(Format::Toml),
            _ => bail!(
                "cannot tell the format of {} (use .json, .yaml, .yml or .toml)",
                path.display()
            ),
        }
    }
}

/// FAQ records arrive either as a bare list or as the form's `{ items = [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum FaqInput {
    Items(Vec<FaqItem>),
    Page(FaqPage),
}

impl From<FaqInput> for Vec<FaqItem> {
    fn from(input: FaqInput) -> Self {
        match input {
            FaqInput::Items(items) => items,
            FaqInput::Page(page) => page.items,
        }
    }
}

pub fn load(kind: SchemaKind, path: &Path) -> Result<SchemaInput> {
    let (raw, format) = if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read input from stdin")?;
        (raw, Format::Json)
    } else {
        let format = Format::from_path(path)?;
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display()))?;
        (raw, format)
    };
    debug!(kind = %kind, ?format, "parsing input record");

    parse(kind, &raw, format)
        .with_context(|| format!("invalid {kind} record in {}", path.display()))
}

fn parse(kind: SchemaKind, raw: &str, format: Format) -> Result<SchemaInput> {
    let input = match kind {
        SchemaKind::Faq => SchemaInput::Faq(decode::<FaqInput>(raw, format)?.into()),
        SchemaKind::Product => SchemaInput::Product(decode(raw, format)?),
        SchemaKind::LocalBusiness => SchemaInput::LocalBusiness(decode(raw, format)?),
        SchemaKind::Article => SchemaInput::Article(decode(raw, format)?),
    };
    Ok(input)
}

fn decode<T: DeserializeOwned>(raw: &str, format: Format) -> Result<T> {
    let value = match format {
        Format::Json => serde_json::from_str(raw)?,
        Format::Yaml => serde_yaml::from_str(raw)?,
        Format::Toml => toml::from_str(raw)?,
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup_core::{Availability, BusinessCategory, TextOrNumber};

    #[test]
    fn faq_accepts_bare_list_and_form_state() {
        let bare = parse(SchemaKind::Faq, r#"[{"question":"Q","answer":"A"}]"#, Format::Json).unwrap();
        let wrapped = parse(
            SchemaKind::Faq,
            "[[items]]\nquestion = \"Q\"\nanswer = \"A\"\n",
            Format::Toml,
        )
        .unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn yaml_product_parses() {
        let raw = "
name: Widget
image: w.jpg
reviews:
  ratingValue: 4.5
  reviewCount: 12
offers:
  price: '9.99'
  currency: EUR
  availability: OutOfStock
  itemCondition: New
";
        let SchemaInput::Product(data) = parse(SchemaKind::Product, raw, Format::Yaml).unwrap()
        else {
            panic!("expected a product");
        };
        assert_eq!(data.offers.availability, Availability::OutOfStock);
        assert_eq!(data.offers.currency, "EUR");
    }

    #[test]
    fn local_business_yaml_selects_category() {
        let raw = "
category: Hotel
type: LocalBusiness
name: Grand
image: g.jpg
hotelClass: 4
starRating: '4.2'
";
        let SchemaInput::LocalBusiness(data) =
            parse(SchemaKind::LocalBusiness, raw, Format::Yaml).unwrap()
        else {
            panic!("expected a local business");
        };
        let BusinessCategory::Hotel(hotel) = data.category else {
            panic!("expected a hotel");
        };
        assert_eq!(hotel.hotel_class, Some(TextOrNumber::from(4u32)));
        assert_eq!(hotel.star_rating, Some(TextOrNumber::from("4.2")));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = Format::from_path(Path::new("record.txt")).unwrap_err();
        assert!(err.to_string().contains("record.txt"));
    }
}
