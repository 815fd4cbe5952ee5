use business::domain::shared::pagination::Sort;

/// Wraps `term` as a case-insensitive `ILIKE` substring pattern, escaping the
/// wildcard characters it may contain.
pub fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Builds an `ORDER BY` clause from a sort whose property is looked up in
/// `columns`. Unknown properties fall back to `fallback`. The primary key is
/// always appended so pages are stable.
pub fn order_by(
    sort: &Sort,
    columns: &[(&str, &'static str)],
    fallback: &'static str,
    id_column: &str,
) -> String {
    let column = columns
        .iter()
        .find(|(property, _)| *property == sort.property)
        .map(|(_, column)| *column)
        .unwrap_or(fallback);

    if column == id_column {
        format!("ORDER BY {} {}", column, sort.direction.as_sql())
    } else {
        format!(
            "ORDER BY {} {}, {} ASC",
            column,
            sort.direction.as_sql(),
            id_column
        )
    }
}
