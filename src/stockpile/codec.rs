//! # Line Codec
//!
//! Each record is persisted as one comma separated line:
//!
//! ```text
//! id,kind,name,price,quantity,<payload>
//!
//! 1,Electronics,Laptop,999.99,4,Acme,24
//! 2,Grocery,Milk,1.25,30,2025-06-01,Dairy
//! 3,Generic,Stapler,7.5,12,Office
//! ```
//!
//! The payload columns depend on the kind:
//!
//! | kind        | columns                   |
//! |-------------|---------------------------|
//! | Electronics | `brand,warranty_months`   |
//! | Grocery     | `expiry_date,category`    |
//! | Generic     | `category`                |
//!
//! There is no quoting or escaping. [`Record::new`] refuses text containing the
//! delimiter, so every record this crate builds survives `decode(encode(r))`.
//!
//! Decoding goes through [`Record::restore`], so a stored quantity below zero
//! loads as is.
//!
//! Decoding needs the five common columns. Payload columns that are missing
//! (files written by older tools) are filled with placeholders instead of
//! failing the line.

use crate::error::ValidationError;
use crate::model::{ExpiryDate, ItemKind, KindTag, Record, DELIMITER};
use thiserror::Error;

const COMMON_FIELDS: usize = 5;

const PLACEHOLDER_BRAND: &str = "Brand";
const PLACEHOLDER_WARRANTY: i64 = 12;
const PLACEHOLDER_CATEGORY: &str = "Category";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected at least 5 fields, found {0}")]
    TooFewFields(usize),

    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown item kind '{0}'")]
    UnknownKind(String),

    #[error("{0}")]
    InvalidRecord(#[from] ValidationError),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

pub fn encode(record: &Record) -> String {
    let payload = match record.kind() {
        ItemKind::Electronics {
            brand,
            warranty_months,
        } => format!("{}{}{}", brand, DELIMITER, warranty_months),
        ItemKind::Grocery {
            expiry_date,
            category,
        } => format!("{}{}{}", expiry_date, DELIMITER, category),
        ItemKind::Generic { category } => category.clone(),
    };

    [
        record.id().to_string(),
        record.tag().to_string(),
        record.name().to_string(),
        record.price().to_string(),
        record.quantity().to_string(),
        payload,
    ]
    .join(&DELIMITER.to_string())
}

pub fn decode(line: &str) -> Result<Record, DecodeError> {
    let tokens: Vec<&str> = line.split(DELIMITER).collect();
    if tokens.len() < COMMON_FIELDS {
        return Err(DecodeError::TooFewFields(tokens.len()));
    }

    let id: u64 = parse_number("id", tokens[0])?;
    let tag = KindTag::parse(tokens[1].trim())
        .ok_or_else(|| DecodeError::UnknownKind(tokens[1].to_string()))?;
    let name = tokens[2];
    let price: f64 = parse_number("price", tokens[3])?;
    let quantity: i64 = parse_number("quantity", tokens[4])?;

    let extra = &tokens[COMMON_FIELDS..];
    let kind = match tag {
        KindTag::Electronics => {
            let brand = extra.first().copied().unwrap_or(PLACEHOLDER_BRAND);
            let warranty = match extra.get(1) {
                Some(raw) => parse_number("warranty", raw)?,
                None => PLACEHOLDER_WARRANTY,
            };
            ItemKind::electronics(brand, warranty)
        }
        KindTag::Grocery => {
            let (expiry, _) = extra
                .first()
                .map(|raw| ExpiryDate::parse_or_sentinel(raw))
                .unwrap_or_default();
            let category = extra.get(1).copied().unwrap_or(PLACEHOLDER_CATEGORY);
            ItemKind::grocery(expiry, category)
        }
        KindTag::Generic => ItemKind::generic(extra.first().copied().unwrap_or_default()),
    };

    Ok(Record::restore(id, name, price, quantity, kind)?)
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, DecodeError> {
    raw.trim()
        .parse()
        .map_err(|_| DecodeError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}
