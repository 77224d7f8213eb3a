use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RESOURCE_NAME: Regex = Regex::new(r"\.([^.}]+)\}$").unwrap();
    static ref ACRONYM_BOUNDARY: Regex = Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap();
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z\d])([A-Z])").unwrap();
}

/// Turn a header attribute into a readable label.
///
/// Resource references such as `{x:Static wpf:ConstantsResources.InsertFunctionHeader}`
/// are reduced to their last segment and split on case boundaries
/// (`Insert Function Header`). Anything else, including a reference the
/// pattern does not recognise, is returned unchanged.
pub fn clean_header(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let trimmed = raw.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        if let Some(caps) = RESOURCE_NAME.captures(trimmed) {
            let name = &caps[1];
            let name = ACRONYM_BOUNDARY.replace_all(name, "$1 $2");
            let name = CAMEL_BOUNDARY.replace_all(&name, "$1 $2");
            return name.replace('_', " ");
        }
    }

    raw.to_string()
}

/// Unescape the five standard XML entities; `&amp;` goes last.
pub fn clean_tag(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    raw.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clean_header_resource_reference() {
        let result = clean_header("{x:Static wpf:ConstantsResources.InsertFunctionHeader}");
        assert_eq!(result, "Insert Function Header");
    }

    #[test]
    fn test_clean_header_acronym_run() {
        assert_eq!(clean_header("{x:Static wpf:R.ABCDef}"), "ABC Def");
        assert_eq!(clean_header("{x:Static wpf:R.SI_Units}"), "SI Units");
    }

    #[test]
    fn test_clean_header_digits_and_underscores() {
        assert_eq!(clean_header("{x:Static wpf:R.Matrix3x3Inverse}"), "Matrix3x3 Inverse");
        assert_eq!(clean_header("{x:Static wpf:R.Constants_Header}"), "Constants Header");
    }

    #[test]
    fn test_clean_header_surrounding_whitespace() {
        assert_eq!(clean_header("  {x:Static wpf:C.Sec}  "), "Sec");
    }

    #[test]
    fn test_clean_header_unmatched_reference_falls_back() {
        assert_eq!(clean_header("{Binding Title}"), "{Binding Title}");
        assert_eq!(clean_header("{x:Static wpf:R.}"), "{x:Static wpf:R.}");
    }

    #[test]
    fn test_clean_header_free_text_untouched() {
        assert_eq!(clean_header("fooBar_baz"), "fooBar_baz");
        assert_eq!(clean_header("Σ Sum"), "Σ Sum");
        assert_eq!(clean_header(""), "");
    }

    #[test]
    fn test_clean_tag_entities() {
        assert_eq!(clean_tag("A &lt;B&gt; &amp; C"), "A <B> & C");
        assert_eq!(clean_tag("&quot;x&quot; &apos;y&apos;"), "\"x\" 'y'");
        assert_eq!(clean_tag(""), "");
    }

    #[test]
    fn test_clean_tag_amp_last_leaves_single_unescape() {
        assert_eq!(clean_tag("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_clean_tag_idempotent_without_ampersand() {
        for s in ["sqrt(x)", "a <= b", "\"quoted\"", "x' = f(x)", ""] {
            let once = clean_tag(s);
            assert_eq!(clean_tag(&once), once);
        }
    }
}
