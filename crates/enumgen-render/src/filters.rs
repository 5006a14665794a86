//! Template filters
//!
//! Registered on every renderer environment, so custom templates can use them.

/// php_string filter - single-quoted PHP string literal
///
/// Usage in templates: {{ case.value|php_string }}
/// Only `\` and `'` need escaping inside single quotes.
pub fn php_string(value: String) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\\' || ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// snake_case filter
///
/// Usage in templates: {{ enum_name|snake_case }}
pub fn snake_case(value: String) -> String {
    enumgen_core::to_snake_case(&value)
}
