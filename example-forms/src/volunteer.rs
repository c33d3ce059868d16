//! The volunteer sign-up form bundled as a JSON asset.
//!
//! Uses every field type, one unknown type (`cpf`, rendered as text) and one
//! field that no section covers.

use dinaform::{FormError, FormSchema, parse_schema};

/// Raw asset text.
pub const VOLUNTEER_JSON: &str = include_str!("../assets/form_exemplo.json");

/// Decode the bundled asset.
pub fn volunteer_form() -> Result<FormSchema, FormError> {
    parse_schema(VOLUNTEER_JSON).map(Option::unwrap_or_default)
}
