use crate::error::ValidationError;
use chrono::NaiveDate;
use std::fmt;

/// Field delimiter of the persisted line format. Text fields may not contain it.
pub const DELIMITER: char = ',';

/// Substituted when a grocery expiry date cannot be parsed.
pub const SENTINEL_EXPIRY: &str = "2024-12-31";

pub const DEFAULT_CATEGORY: &str = "General";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Electronics,
    Grocery,
    Generic,
}

impl KindTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            KindTag::Electronics => "Electronics",
            KindTag::Grocery => "Grocery",
            KindTag::Generic => "Generic",
        }
    }

    /// Exact, case-sensitive match against the persisted tag.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "Electronics" => Some(KindTag::Electronics),
            "Grocery" => Some(KindTag::Grocery),
            "Generic" => Some(KindTag::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate(NaiveDate);

impl ExpiryDate {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "expiry date",
            reason: format!("expected YYYY-MM-DD, got '{}'", raw),
        };
        if raw.len() != DATE_LEN {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Parses `raw`, falling back to the sentinel date. The parse error is
    /// handed back so the caller can report the substitution.
    pub fn parse_or_sentinel(raw: &str) -> (Self, Option<ValidationError>) {
        match Self::parse(raw) {
            Ok(date) => (date, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

impl Default for ExpiryDate {
    fn default() -> Self {
        Self(NaiveDate::parse_from_str(SENTINEL_EXPIRY, DATE_FORMAT).unwrap_or_default())
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// Kind-specific payload. Every record carries exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Electronics {
        brand: String,
        warranty_months: u32,
    },
    Grocery {
        expiry_date: ExpiryDate,
        category: String,
    },
    Generic {
        category: String,
    },
}

impl ItemKind {
    /// Negative warranties are clamped to zero.
    pub fn electronics(brand: impl Into<String>, warranty_months: i64) -> Self {
        ItemKind::Electronics {
            brand: brand.into().trim().to_string(),
            warranty_months: warranty_months.clamp(0, u32::MAX as i64) as u32,
        }
    }

    pub fn grocery(expiry_date: ExpiryDate, category: impl Into<String>) -> Self {
        ItemKind::Grocery {
            expiry_date,
            category: category.into().trim().to_string(),
        }
    }

    /// A blank category becomes [`DEFAULT_CATEGORY`].
    pub fn generic(category: impl Into<String>) -> Self {
        let category = category.into();
        let category = category.trim();
        ItemKind::Generic {
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
        }
    }

    pub fn tag(&self) -> KindTag {
        match self {
            ItemKind::Electronics { .. } => KindTag::Electronics,
            ItemKind::Grocery { .. } => KindTag::Grocery,
            ItemKind::Generic { .. } => KindTag::Generic,
        }
    }

    /// The field free-text search looks at besides the name.
    pub fn category_like(&self) -> &str {
        match self {
            ItemKind::Electronics { brand, .. } => brand,
            ItemKind::Grocery { category, .. } | ItemKind::Generic { category } => category,
        }
    }

    /// Human readable summary of the payload.
    pub fn details(&self) -> String {
        match self {
            ItemKind::Electronics {
                brand,
                warranty_months,
            } => format!("Brand: {}, Warranty: {} months", brand, warranty_months),
            ItemKind::Grocery {
                expiry_date,
                category,
            } => format!("Category: {}, Expires: {}", category, expiry_date),
            ItemKind::Generic { category } => format!("Category: {}", category),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ItemKind::Electronics { brand, .. } => check_text("brand", brand),
            ItemKind::Grocery { category, .. } | ItemKind::Generic { category } => {
                check_text("category", category)
            }
        }
    }
}

/// One inventory entry.
///
/// Fields are private: a `Record` can only be built through [`Record::new`]
/// or [`Record::restore`], and its quantity only moves through the
/// inventory's stock operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: u64,
    name: String,
    price: f64,
    quantity: i64,
    kind: ItemKind,
}

impl Record {
    /// A new record. Every field rule applies, including a non-negative quantity.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ItemKind,
    ) -> Result<Self, ValidationError> {
        let record = Self::restore(id, name, price, quantity, kind)?;
        if record.quantity < 0 {
            return Err(ValidationError::Negative { field: "quantity" });
        }
        Ok(record)
    }

    /// Rebuilds a persisted record. Same rules as [`Record::new`] except that
    /// the stored quantity may be below zero.
    pub fn restore(
        id: u64,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ItemKind,
    ) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be a positive integer".to_string(),
            });
        }

        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::Required { field: "name" });
        }
        check_text("name", &name)?;

        if !price.is_finite() {
            return Err(ValidationError::NotFinite { field: "price" });
        }
        if price < 0.0 {
            return Err(ValidationError::Negative { field: "price" });
        }
        kind.validate()?;

        Ok(Self {
            id,
            name,
            price,
            quantity,
            kind,
        })
    }

    /// Builds a record from collaborator input. An unusable expiry date is
    /// replaced by the sentinel and the parse error returned alongside.
    pub fn from_draft(
        id: u64,
        draft: ItemDraft,
    ) -> Result<(Self, Option<ValidationError>), ValidationError> {
        let (kind, substituted) = draft.kind.resolve();
        let record = Self::new(id, draft.name, draft.price, draft.quantity, kind)?;
        Ok((record, substituted))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

/// Unvalidated input for a new item, as handed over by a UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    pub kind: KindDraft,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KindDraft {
    Electronics {
        brand: String,
        warranty_months: i64,
    },
    Grocery {
        expiry_date: String,
        category: String,
    },
    Generic {
        category: Option<String>,
    },
}

impl KindDraft {
    fn resolve(self) -> (ItemKind, Option<ValidationError>) {
        match self {
            KindDraft::Electronics {
                brand,
                warranty_months,
            } => (ItemKind::electronics(brand, warranty_months), None),
            KindDraft::Grocery {
                expiry_date,
                category,
            } => {
                let (date, substituted) = ExpiryDate::parse_or_sentinel(&expiry_date);
                (ItemKind::grocery(date, category), substituted)
            }
            KindDraft::Generic { category } => {
                (ItemKind::generic(category.unwrap_or_default()), None)
            }
        }
    }
}

fn check_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(ValidationError::InvalidFormat {
            field,
            reason: "must not contain commas or line breaks".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(kind: KindDraft) -> ItemDraft {
        ItemDraft {
            name: "Thing".into(),
            price: 1.5,
            quantity: 3,
            kind,
        }
    }

    #[test]
    fn rejects_empty_name() {
        let err = Record::new(1, "   ", 1.0, 1, ItemKind::generic("")).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "name" });
    }

    #[test]
    fn rejects_negative_price_and_quantity() {
        assert_eq!(
            Record::new(1, "A", -0.01, 1, ItemKind::generic("")).unwrap_err(),
            ValidationError::Negative { field: "price" }
        );
        assert_eq!(
            Record::new(1, "A", 1.0, -1, ItemKind::generic("")).unwrap_err(),
            ValidationError::Negative { field: "quantity" }
        );
    }

    #[test]
    fn restore_accepts_negative_quantity() {
        let record = Record::restore(1, "A", 1.0, -2, ItemKind::generic("")).unwrap();
        assert_eq!(record.quantity(), -2);
        assert_eq!(
            Record::restore(1, "A", -1.0, -2, ItemKind::generic("")).unwrap_err(),
            ValidationError::Negative { field: "price" }
        );
    }

    #[test]
    fn rejects_nan_price() {
        assert_eq!(
            Record::new(1, "A", f64::NAN, 1, ItemKind::generic("")).unwrap_err(),
            ValidationError::NotFinite { field: "price" }
        );
    }

    #[test]
    fn rejects_zero_id() {
        assert!(Record::new(0, "A", 1.0, 1, ItemKind::generic("")).is_err());
    }

    #[test]
    fn rejects_delimiter_in_text_fields() {
        assert!(Record::new(1, "A,B", 1.0, 1, ItemKind::generic("")).is_err());
        assert!(Record::new(1, "A", 1.0, 1, ItemKind::electronics("Acme, Inc", 12)).is_err());
        assert!(Record::new(1, "A", 1.0, 1, ItemKind::generic("x\ny")).is_err());
    }

    #[test]
    fn warranty_is_clamped_to_zero() {
        let kind = ItemKind::electronics("Acme", -6);
        assert_eq!(
            kind,
            ItemKind::Electronics {
                brand: "Acme".into(),
                warranty_months: 0
            }
        );
    }

    #[test]
    fn generic_category_defaults_to_general() {
        assert_eq!(ItemKind::generic("  ").category_like(), DEFAULT_CATEGORY);
        assert_eq!(ItemKind::generic("Tools").category_like(), "Tools");
    }

    #[test]
    fn expiry_date_requires_iso_shape() {
        assert!(ExpiryDate::parse("2025-03-01").is_ok());
        assert!(ExpiryDate::parse("2025-3-1").is_err());
        assert!(ExpiryDate::parse("01/03/2025").is_err());
        assert!(ExpiryDate::parse("2025-02-30").is_err());
    }

    #[test]
    fn invalid_expiry_falls_back_to_sentinel() {
        let (record, substituted) = Record::from_draft(
            7,
            draft(KindDraft::Grocery {
                expiry_date: "soon".into(),
                category: "Dairy".into(),
            }),
        )
        .unwrap();

        assert!(substituted.is_some());
        match record.kind() {
            ItemKind::Grocery { expiry_date, .. } => {
                assert_eq!(expiry_date.to_string(), SENTINEL_EXPIRY)
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn valid_expiry_is_kept() {
        let (record, substituted) = Record::from_draft(
            7,
            draft(KindDraft::Grocery {
                expiry_date: "2026-01-15".into(),
                category: "Dairy".into(),
            }),
        )
        .unwrap();

        assert!(substituted.is_none());
        assert_eq!(
            record.kind().details(),
            "Category: Dairy, Expires: 2026-01-15"
        );
    }

    #[test]
    fn name_is_trimmed() {
        let record = Record::new(1, "  Lamp ", 1.0, 0, ItemKind::generic("")).unwrap();
        assert_eq!(record.name(), "Lamp");
    }
}
