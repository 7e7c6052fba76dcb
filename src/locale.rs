/*!
 * Host locale resolution.
 *
 * The widget host embeds the timeline in a document tree where language
 * attributes may sit on any ancestor element. [`LanguageScope`]
 * abstracts that ancestor chain so the nearest language tag can be
 * resolved without a DOM dependency; authored language codes are
 * normalized to ISO 639-1 where possible.
 */

use isolang::Language;

/// Locale used when no ancestor carries a language tag
pub const FALLBACK_LOCALE: &str = "en";

/// One node in the host's element ancestor chain
pub trait LanguageScope {
    /// Language tag declared on this node, if any
    fn language_tag(&self) -> Option<String>;

    /// Enclosing scope, `None` at the document root
    fn parent(&self) -> Option<&dyn LanguageScope>;
}

/// Walk the ancestor chain for the nearest non-empty language tag,
/// falling back to [`FALLBACK_LOCALE`]
pub fn closest_locale_code(scope: Option<&dyn LanguageScope>) -> String {
    let mut current = scope;

    while let Some(node) = current {
        match node.language_tag() {
            Some(tag) if !tag.is_empty() => return tag,
            _ => current = node.parent(),
        }
    }

    FALLBACK_LOCALE.to_string()
}

/// Normalize an authored language code to ISO 639-1 where one exists.
///
/// Region subtags are tolerated (`"nb-NO"` normalizes to `"nb"`) and
/// matching is case-insensitive. A code naming a language with no ISO
/// 639-1 equivalent (`"yue"`) passes through as its lowercased primary
/// subtag. Returns `None` for codes that name no known language.
pub fn normalize_language_code(code: &str) -> Option<String> {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();

    let language = match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }?;

    Some(
        language
            .to_639_1()
            .map(str::to_string)
            .unwrap_or(primary),
    )
}
