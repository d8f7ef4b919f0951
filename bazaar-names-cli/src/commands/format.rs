use bazaar_names_catalog::{format_name, name_override};

/// Print the display name `id` would get in the table.
pub(crate) fn run_format(id: &str, name: Option<&str>) {
    let source = if name_override(id).is_some() {
        "override"
    } else if name.is_some_and(|n| !n.is_empty()) {
        "catalog name"
    } else {
        "fallback prettifier"
    };
    log::debug!("{id}: resolved via {source}");

    println!("{}", format_name(name, id));
}
