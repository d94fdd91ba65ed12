//! Download filename sanitization

/// Build the on-disk filename for a record download
///
/// Runs of whitespace collapse to a single underscore and a fixed `.jpg`
/// extension is appended regardless of the actual encoding (a carried
/// inaccuracy; the server does not expose content types).
///
/// # Examples
/// ```
/// use galtui::logic::filename::download_filename;
///
/// assert_eq!(download_filename("Sunset at Beach"), "Sunset_at_Beach.jpg");
/// assert_eq!(download_filename("image"), "image.jpg");
/// ```
pub fn download_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut in_whitespace = false;

    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push('_');
                in_whitespace = true;
            }
        } else {
            out.push(ch);
            in_whitespace = false;
        }
    }

    out.push_str(".jpg");
    out
}
