//! Title to slug conversion

/// Whitespace recognised when collapsing runs: space, `\t`, `\n`, `\v`, `\f`, `\r`.
///
/// Narrower than [`char::is_whitespace`]; non-breaking and other Unicode spaces
/// are kept in the slug untouched.
pub fn is_slug_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Lowercase `title` and replace every run of whitespace with a single hyphen.
///
/// Leading or trailing whitespace becomes a leading or trailing hyphen.
/// No other characters are touched.
///
/// # Examples
/// ```ignore
/// assert_eq!(slugify("Hello   World"), "hello-world");
/// assert_eq!(slugify(" Padded "), "-padded-");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_run = false;
    for c in title.to_lowercase().chars() {
        if is_slug_whitespace(c) {
            if !in_run {
                slug.push('-');
                in_run = true;
            }
        } else {
            slug.push(c);
            in_run = false;
        }
    }
    slug
}
