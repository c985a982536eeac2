//! Name mangling shared by the exporters

/// `cardForeground` -> `card-foreground`
pub(crate) fn kebab_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for c in camel.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Escape characters that are not valid in a CSS custom-property name.
///
/// Token keys only ever contain letters, digits, `-` and `.`.
pub(crate) fn css_ident(key: &str) -> String {
    key.replace('.', "\\.")
}

/// Leading numeric value of a length (`"16px"` -> `16.0`, `"1.25"` -> `1.25`).
///
/// Strings without a numeric prefix yield `0.0`.
pub(crate) fn parse_length(value: &str) -> f64 {
    let trimmed = value.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().unwrap_or(0.0)
}
