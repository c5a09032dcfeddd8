//! Query rewriting helpers
//!
//! Pure string functions used by the logo sources to derive the text they
//! look up: dropping an imperative leading verb, guessing a `.com` domain,
//! and turning a name into an icon-CDN slug.

/// Leading verbs recognised on imperative topic titles, checked in order
pub const LEADING_VERBS: &[&str] = &["Learn", "Master", "Study", "Practice", "Become", "Get"];

/// Top-level domain appended to blind guesses
pub const GUESS_TLD: &str = ".com";

/// Strip a single leading verb from `query`
///
/// Matches case-insensitively against [`LEADING_VERBS`] and only when the verb
/// is followed by a space. Returns `None` when nothing was stripped.
/// At most one verb is removed: `"Learn Learn Java"` becomes `"Learn Java"`.
pub fn strip_leading_verb(query: &str) -> Option<&str> {
    strip_leading_verb_from(query, LEADING_VERBS)
}

/// Same as [`strip_leading_verb`] with a caller-supplied verb list
pub fn strip_leading_verb_from<'a>(query: &'a str, verbs: &[&str]) -> Option<&'a str> {
    verbs.iter().find_map(|verb| {
        let head = query.get(..verb.len())?;
        if !head.eq_ignore_ascii_case(verb) {
            return None;
        }
        query[verb.len()..].strip_prefix(' ')
    })
}

/// Characters that would end the host part of a URL built from a guess
const URL_DELIMITERS: &[char] = &['/', '?', '#', '@', ':', '\\', '%'];

/// Guess a domain from a query: drop whitespace, lower-case, append `.com`
///
/// Returns `None` for an empty stem or one containing `/ ? # @ : \ %`,
/// which would turn the guess into a path, query or fragment.
pub fn guess_domain(query: &str) -> Option<String> {
    let stem: String = query
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    if stem.is_empty() || stem.contains(URL_DELIMITERS) {
        return None;
    }

    Some(format!("{}{}", stem, GUESS_TLD))
}

/// Slug used by the icon CDNs, e.g. `"Node.js"` -> `"nodedotjs"`
pub fn icon_slug(query: &str) -> Option<String> {
    let slug = query
        .trim()
        .to_lowercase()
        .replace(' ', "")
        .replace('.', "dot")
        .replace("++", "plusplus")
        .replace('#', "sharp");

    let slug = match slug.as_str() {
        "nodejs" => "nodedotjs".to_string(),
        _ => slug,
    };

    if slug.is_empty() || !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return None;
    }
    Some(slug)
}
