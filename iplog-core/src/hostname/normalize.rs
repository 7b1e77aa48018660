use url::Url;

/// Extract a candidate hostname from user input, which may be either a bare
/// hostname or a URL.
///
/// For URLs the whole authority is returned, so a non-default port stays
/// attached to the host. Anything that is not an absolute URL with an
/// authority is returned trimmed and otherwise untouched.
pub fn normalize(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(u) = Url::parse(raw) {
        let authority = u.authority();
        if !authority.is_empty() {
            return authority.to_string();
        }
    }

    raw.to_string()
}
