//! Name derivations for generated members and artifact keys.

/// Convert a declared name to `snake_case`.
///
/// Handles acronym runs (`HTTPServer` becomes `http_server`); any non-alphanumeric
/// character becomes an underscore.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_numeric());
            let acronym_end =
                i > 0 && chars[i - 1].is_uppercase() && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if (prev_lower || acronym_end) && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a declared name to `SCREAMING_SNAKE_CASE`.
pub fn screaming_case(name: &str) -> String {
    snake_case(name).to_ascii_uppercase()
}
