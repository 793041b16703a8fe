//! Decoding of the item endpoint's JSON payload
//!
//! The endpoint returns a bare array of records. Each record is checked on
//! its own: a bad record is logged and skipped, the rest still load.

use crate::{Item, PricingOption};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array of items")]
    NotAnArray,
}

#[derive(Error, Debug, PartialEq)]
pub enum ItemError {
    #[error("malformed record: {0}")]
    Malformed(String),
    #[error("unknown pricing option {0}")]
    UnknownPricingOption(i64),
    #[error("invalid price {0}")]
    InvalidPrice(f64),
    #[error("paid item has no price")]
    MissingPrice,
}

/// Record ids arrive as either strings or numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    id: WireId,
    title: String,
    creator: String,
    image_path: String,
    pricing_option: i64,
    price: Option<f64>,
}

impl TryFrom<WireItem> for Item {
    type Error = ItemError;

    fn try_from(wire: WireItem) -> Result<Self, Self::Error> {
        let pricing_option = PricingOption::from_code(wire.pricing_option)
            .ok_or(ItemError::UnknownPricingOption(wire.pricing_option))?;

        if let Some(price) = wire.price {
            if !price.is_finite() || price < 0.0 {
                return Err(ItemError::InvalidPrice(price));
            }
        }
        if pricing_option == PricingOption::Paid && wire.price.is_none() {
            return Err(ItemError::MissingPrice);
        }

        let id = match wire.id {
            WireId::Text(id) => id,
            WireId::Number(n) => n.to_string(),
        };

        Ok(Item {
            id,
            title: wire.title,
            creator: wire.creator,
            image_path: wire.image_path,
            pricing_option,
            price: wire.price,
        })
    }
}

fn decode_record(value: serde_json::Value) -> Result<Item, ItemError> {
    let wire: WireItem =
        serde_json::from_value(value).map_err(|e| ItemError::Malformed(e.to_string()))?;
    Item::try_from(wire)
}

/// Decode the endpoint payload, skipping records that fail validation.
pub fn decode_items(payload: &str) -> Result<Vec<Item>, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    let serde_json::Value::Array(records) = value else {
        return Err(DecodeError::NotAnArray);
    };

    let total = records.len();
    let mut items = Vec::with_capacity(total);
    for (index, record) in records.into_iter().enumerate() {
        match decode_record(record) {
            Ok(item) => items.push(item),
            Err(e) => warn!("Skipping item record {index}: {e}"),
        }
    }

    debug!("Decoded {} of {} item records", items.len(), total);
    Ok(items)
}
