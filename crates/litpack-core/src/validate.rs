use crate::error::{LitError, Result};

/// Advisory legality check for a derived identifier.
///
/// The packer never rejects or rewrites an identifier (the declaration
/// is emitted regardless); callers use this to warn before the C
/// compiler does.
pub fn check_identifier(ident: &str) -> Result<()> {
    let mut chars = ident.chars();

    let first = match chars.next() {
        Some(c) => c,
        None => return Err(LitError::Validation("identifier is empty".into())),
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(LitError::Validation(format!(
            "identifier {:?} starts with {:?}, outside [A-Za-z_]",
            ident, first
        )));
    }

    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Err(LitError::Validation(format!(
                "identifier {:?} contains {:?}, outside [A-Za-z0-9_]",
                ident, c
            )));
        }
    }

    Ok(())
}
