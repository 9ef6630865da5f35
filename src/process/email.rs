// src/process/email.rs
use crate::error::FormatError;
use crate::process::name::NameParts;

/// Placeholder domain for synthesized contact addresses.
pub const EMAIL_DOMAIN: &str = "email.com";

/// Derive a placeholder address from a normalized `"First M. Last"` name:
/// every token lower-cased, initial periods dropped, joined with dots.
/// `"John Q. Public"` → `"john.q.public@email.com"`.
pub fn synthesize_email(normalized: &str) -> Result<String, FormatError> {
    let parts = NameParts::from_display(normalized)?;
    let mut local: Vec<String> = parts.given.iter().map(|t| t.to_lowercase()).collect();
    local.push(parts.last.to_lowercase());
    Ok(format!("{}@{}", local.join("."), EMAIL_DOMAIN))
}
