//! Semicolon-delimited multi-value fields.
//!
//! Most coded fields may carry several codes joined by `;`. An empty field
//! decodes to no codes at all, which is different from a field holding a
//! single empty code (`";"` decodes to two empty codes).

/// Separator between codes in a multi-value field.
pub const SEPARATOR: char = ';';

/// Split a field into its codes, preserving order and duplicates.
pub fn split(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(SEPARATOR).collect()
}

/// Number of codes in a field.
pub fn count(value: &str) -> usize {
    if value.is_empty() {
        return 0;
    }
    value.split(SEPARATOR).count()
}

/// True if any code in the field equals `code`.
pub fn contains(value: &str, code: &str) -> bool {
    !value.is_empty() && value.split(SEPARATOR).any(|part| part == code)
}
