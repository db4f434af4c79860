//! Cart quantity rules.
//!
//! A cart row exists only while its quantity is at least 1. Adding
//! accumulates onto the stored quantity; setting replaces it, and setting
//! to zero removes the row. No row may exceed [`MAX_CART_QUANTITY`].

use crate::error::CoreError;

/// Smallest quantity a cart row may hold.
pub const MIN_CART_QUANTITY: i32 = 1;

/// Largest quantity a cart row may hold, including accumulated adds.
pub const MAX_CART_QUANTITY: i32 = 10_000;

/// What an explicit quantity update does to an existing cart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// Quantity 0: delete the row.
    Remove,
    /// Quantity > 0: overwrite the stored quantity.
    Replace(i32),
}

/// Error for a quantity, or an accumulated total, above [`MAX_CART_QUANTITY`].
pub fn quantity_too_large() -> CoreError {
    CoreError::Validation(format!(
        "Quantity cannot exceed {MAX_CART_QUANTITY} per record"
    ))
}

/// Validate the quantity of an "add to cart" request.
pub fn validate_add_quantity(quantity: i32) -> Result<i32, CoreError> {
    if quantity < MIN_CART_QUANTITY {
        return Err(CoreError::Validation(format!(
            "Quantity must be at least {MIN_CART_QUANTITY}"
        )));
    }
    if quantity > MAX_CART_QUANTITY {
        return Err(quantity_too_large());
    }
    Ok(quantity)
}

/// Classify the quantity of a "set quantity" request.
pub fn classify_quantity_update(quantity: i32) -> Result<QuantityUpdate, CoreError> {
    match quantity {
        q if q < 0 => Err(CoreError::Validation(
            "Quantity cannot be negative".into(),
        )),
        0 => Ok(QuantityUpdate::Remove),
        q if q > MAX_CART_QUANTITY => Err(quantity_too_large()),
        q => Ok(QuantityUpdate::Replace(q)),
    }
}
