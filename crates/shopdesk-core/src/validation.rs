//! # Validation Module
//!
//! Input validation run by the store before a record is inserted or a
//! quantity is applied.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Dashboard (TypeScript)                                       │
//! │  ├── Form checks (name present, price > 0)                             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Console commands                                             │
//! │  └── Adjustment ranges (VAT, discount, shipping, tendered)             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store (THIS MODULE)                                          │
//! │  ├── Record fields (id, name, price, stock, barcode)                   │
//! │  └── Quantities for cart and purchase lines                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopdesk_core::validation::{validate_price_cents, validate_quantity};
//!
//! assert!(validate_price_cents(11500).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Customer, Product, Supplier};
use crate::{MAX_AMOUNT_CENTS, MAX_ITEM_QUANTITY, MAX_STOCK};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 64;
const MAX_NAME_LEN: usize = 200;
const MAX_BARCODE_LEN: usize = 32;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an entity id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_ID_LEN,
        });
    }

    Ok(())
}

/// Validates a display name (product, supplier, customer).
///
/// ## Example
/// ```rust
/// use shopdesk_core::validation::validate_name;
///
/// assert!(validate_name("Hair Towel").is_ok());
/// assert!(validate_name("  ").is_err());
/// ```
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a barcode.
///
/// ## Rules
/// - 1 to 32 characters
/// - Letters and digits only (EAN/UPC are digits; internal codes may mix)
pub fn validate_barcode(barcode: &str) -> ValidationResult<()> {
    if barcode.is_empty() {
        return Err(ValidationError::Required {
            field: "barcode".to_string(),
        });
    }

    if barcode.len() > MAX_BARCODE_LEN {
        return Err(ValidationError::TooLong {
            field: "barcode".to_string(),
            max: MAX_BARCODE_LEN,
        });
    }

    if !barcode.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "barcode".to_string(),
            reason: "must contain only letters and digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart or purchase quantity.
///
/// ## Rules
/// - Must be positive
/// - At most [`MAX_ITEM_QUANTITY`]
///
/// Unlike the field validators this reports [`CoreError::InvalidQuantity`]
/// directly, since a bad quantity is a rejected operation rather than a
/// malformed record.
pub fn validate_quantity(quantity: i64) -> CoreResult<()> {
    if quantity <= 0 || quantity > MAX_ITEM_QUANTITY {
        return Err(CoreError::InvalidQuantity { quantity });
    }
    Ok(())
}

/// Validates a price in cents. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    validate_amount_cents("price", cents)
}

/// Validates a stock level.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if !(0..=MAX_STOCK).contains(&stock) {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: MAX_STOCK,
        });
    }
    Ok(())
}

/// Validates a money amount (discount, shipping, cost, ...).
///
/// ## Rules
/// - Must be non-negative
/// - At most [`MAX_AMOUNT_CENTS`]
pub fn validate_amount_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_AMOUNT_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_AMOUNT_CENTS,
        });
    }
    Ok(())
}

/// Validates a VAT rate in basis points (0% to 100%).
pub fn validate_vat_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "vat".to_string(),
            min: 0,
            max: 10000,
        });
    }
    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a product before insert or after a patch is applied.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_id(&product.id)?;
    validate_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_stock(product.stock)?;
    if let Some(barcode) = &product.barcode {
        validate_barcode(barcode)?;
    }
    Ok(())
}

pub fn validate_supplier(supplier: &Supplier) -> ValidationResult<()> {
    validate_id(&supplier.id)?;
    validate_name(&supplier.name)
}

pub fn validate_customer(customer: &Customer) -> ValidationResult<()> {
    validate_id(&customer.id)?;
    validate_name(&customer.name)
}

// =============================================================================
// Unit Tests
// =============================================================================
