//! Naming rules shared by page generation, navigation, and scaffolding.
//!
//! Every generated path and identifier is derived from the component's
//! metadata by the pure functions in this module, so two runs over the same
//! sources always land on the same files.
//!
//! ## Folder names
//!
//! The documentation folder comes from `SUGGESTED_FILE` with its extension
//! removed and camelCase turned into hyphenated lowercase:
//! - `MyWidget.tsx` → `my-widget`
//! - `AccountCard.tsx` → `account-card`
//! - `widget.tsx` → `widget`
//! - `account-card.tsx` → `account-card`
//!
//! A leading uppercase letter never produces a leading hyphen. Consecutive
//! capitals are split letter by letter (`ABCWidget` → `a-b-c-widget`).

/// Remove the final `.ext` from a file name.
///
/// Only a non-empty extension without path separators counts, so `page.` and
/// `dir.v2/page` are returned unchanged.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => {
            let ext = &name[pos + 1..];
            if ext.is_empty() || ext.contains('/') {
                name
            } else {
                &name[..pos]
            }
        }
        None => name,
    }
}

/// Convert camelCase/PascalCase into hyphenated lowercase.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (offset, c) in name.char_indices() {
        if c.is_uppercase() {
            if offset > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Documentation folder name for a suggested filename.
pub fn doc_folder_name(suggested_filename: &str) -> String {
    to_kebab_case(strip_extension(suggested_filename))
}

/// Navigation href for a suggested filename under `route_prefix`.
///
/// Points at the same folder the page is written to, so the link always
/// resolves to the generated page.
pub fn nav_href(route_prefix: &str, suggested_filename: &str) -> String {
    format!("{}/{}", route_prefix, doc_folder_name(suggested_filename))
}

/// Name of the default export in a generated page: the display name with all
/// whitespace removed, plus `Documentation`.
///
/// Characters that cannot appear in an identifier (`'`, `-`, `.`) are dropped
/// as well, so `Customer's Persona` gives `CustomersPersonaDocumentation`.
pub fn page_export_name(display_name: &str) -> String {
    let mut name: String = display_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    name.push_str("Documentation");
    name
}

/// Import specifier stem for a component source file (`account-card.tsx` → `account-card`).
pub fn module_name(source_filename: &str) -> &str {
    strip_extension(source_filename)
}

/// `my-widget` / `my_widget` / `myWidget` → `MyWidget`.
pub fn to_pascal_case(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// `MyWidget` → `My Widget`.
pub fn to_display_name(pascal: &str) -> String {
    let mut out = String::with_capacity(pascal.len() + 4);
    for (offset, c) in pascal.char_indices() {
        if c.is_uppercase() && offset > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
