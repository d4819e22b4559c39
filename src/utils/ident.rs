//! Identifier utilities for emitted native source.
//!
//! Managed names may contain characters that are not valid in native identifiers
//! (namespaces, generic arity markers, compiler generated names like `<Name>k__BackingField`).

/// Escapes a managed name for safe use as part of a native identifier.
///
/// Every character that is not an ASCII letter or digit becomes `_`, so the result has as many
/// characters as the input. Callers prefix it (`cls_`, `fld_`) to rule out a leading digit.
///
/// # Arguments
///
/// * `s` - The managed name to escape
///
/// # Returns
///
/// A new string containing only `[A-Za-z0-9_]`.
///
/// # Examples
///
/// ```rust
/// use cilnative::utils::escape_identifier;
///
/// assert_eq!(escape_identifier("System.Collections.Generic.List`1"), "System_Collections_Generic_List_1");
/// ```
#[must_use]
pub fn escape_identifier(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
