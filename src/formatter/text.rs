/// Possessive form of a name
///
/// Names ending in `s` or `S` only take an apostrophe.
///
/// # Examples
/// ```
/// use humanize_format::formatter::possessive;
///
/// assert_eq!(possessive("James"), "James'");
/// assert_eq!(possessive("Anna"), "Anna's");
/// ```
pub fn possessive(name: &str) -> String {
    let ends_with_s = name
        .chars()
        .next_back()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'s'));

    if ends_with_s {
        format!("{}'", name)
    } else {
        format!("{}'s", name)
    }
}
