/// Convert snake_case or kebab-case to lowerCamelCase.
///
/// Normalizes words separated by `_` or `-`. If the input has no separators
/// and starts lowercase, it is returned unchanged.
///
/// # Examples
/// ```
/// use shapeql_core::utils::to_camel_case;
/// assert_eq!(to_camel_case("created_at"), "createdAt");
/// assert_eq!(to_camel_case("FOO_BAR"), "fooBar");
/// assert_eq!(to_camel_case("fooBar"), "fooBar");  // idempotent
/// ```
pub fn to_camel_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-')
    }

    let has_separator = s.chars().any(is_separator);
    let starts_lowercase = s.chars().next().is_some_and(|c| c.is_ascii_lowercase());

    // Already camelCase: starts lowercase, no separators
    if starts_lowercase && !has_separator {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = !result.is_empty();
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Strip the `r#` prefix of a raw identifier.
///
/// # Examples
/// ```
/// use shapeql_core::utils::unraw;
/// assert_eq!(unraw("r#type"), "type");
/// assert_eq!(unraw("kind"), "kind");
/// ```
pub fn unraw(ident: &str) -> &str {
    ident.strip_prefix("r#").unwrap_or(ident)
}
