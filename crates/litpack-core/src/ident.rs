// crates/litpack-core/src/ident.rs

/// Derive the C identifier for a packed file.
///
/// Every `.` in the file name becomes `_`; the prefix is prepended
/// verbatim. `data.bin` with prefix `res_` gives `res_data_bin`.
/// No de-duplication and no legality check here; callers that want an
/// advisory check use `validate::check_identifier`.
pub fn derive_identifier(prefix: &str, file_name: &str) -> String {
    format!("{}{}", prefix, file_name.replace('.', "_"))
}
