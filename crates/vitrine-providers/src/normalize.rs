//! Extracts validated site assets from loosely-structured provider text.
//!
//! Providers are told to return bare JSON, but replies routinely arrive
//! wrapped in markdown fences or surrounded by prose. Rather than
//! requiring the whole reply to be pure JSON, the candidate is the span
//! from the first `{` to the last `}` in the trimmed text. This is a
//! deliberate best-effort heuristic: a reply containing two objects gets
//! the widest span, which can fail to parse. Keep it lenient.

use serde_json::Value;

use vitrine_site::SiteAssets;

/// Errors that can occur during normalization.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("No JSON object found in the provider reply")]
    NoJson,

    #[error("Provider reply is not valid JSON: {0}")]
    Parse(String),

    #[error("Provider reply is missing a usable '{0}' field")]
    MissingField(&'static str),
}

/// Parse raw provider text into a complete set of site assets.
///
/// Fails when no JSON can be located, when parsing fails, or when any
/// of the three asset fields is absent or falsy. Never returns partial
/// assets.
pub fn normalize(raw: &str) -> Result<SiteAssets, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::NoJson);
    }

    // Widest brace span; the whole text when no brace pair exists.
    let candidate = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    };

    let object: Value =
        serde_json::from_str(candidate).map_err(|e| NormalizeError::Parse(e.to_string()))?;

    Ok(SiteAssets {
        html: require_field(&object, "html")?,
        css: require_field(&object, "css")?,
        js: require_field(&object, "js")?,
    })
}

/// Fetch a field, rejecting anything falsy: absent, null, `false`, `0`,
/// or the empty string. Truthy non-string values are rendered as JSON
/// text rather than rejected, so the check stays a falsiness check and
/// not a type check.
fn require_field(object: &Value, key: &'static str) -> Result<String, NormalizeError> {
    match object.get(key) {
        None | Some(Value::Null) => Err(NormalizeError::MissingField(key)),
        Some(Value::String(s)) if s.is_empty() => Err(NormalizeError::MissingField(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Bool(false)) => Err(NormalizeError::MissingField(key)),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(NormalizeError::MissingField(key)),
        Some(other) => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn passes_valid_compact_json_through_unchanged() {
        let assets = normalize(r#"{"html":"a","css":"b","js":"c"}"#).unwrap();

        assert_eq!(assets.html, "a");
        assert_eq!(assets.css, "b");
        assert_eq!(assets.js, "c");
    }

    #[test]
    fn tolerates_surrounding_prose_and_fences() {
        let raw = "Sure! Here is your website:\n```json\n{\"html\":\"<p>hi</p>\",\"css\":\"p{}\",\"js\":\"//x\"}\n```\nLet me know if you need changes.";

        // The trailing prose has no `}`, so the brace span ends at the
        // object and the candidate parses cleanly.
        let assets = normalize(raw).unwrap();
        assert_eq!(assets.html, "<p>hi</p>");
    }

    #[test]
    fn fails_on_empty_input() {
        assert!(matches!(normalize(""), Err(NormalizeError::NoJson)));
        assert!(matches!(normalize("   \n "), Err(NormalizeError::NoJson)));
    }

    #[test]
    fn fails_on_unparseable_text() {
        let err = normalize("I could not generate a site today.").unwrap_err();
        assert!(matches!(err, NormalizeError::Parse(_)));
    }

    #[test]
    fn fails_when_a_field_is_absent() {
        let err = normalize(r#"{"html":"a","css":"b"}"#).unwrap_err();
        assert!(matches!(err, NormalizeError::MissingField("js")));
    }

    #[test]
    fn fails_when_a_field_is_empty_or_null() {
        assert!(matches!(
            normalize(r#"{"html":"a","css":"","js":"c"}"#),
            Err(NormalizeError::MissingField("css"))
        ));
        assert!(matches!(
            normalize(r#"{"html":null,"css":"b","js":"c"}"#),
            Err(NormalizeError::MissingField("html"))
        ));
        assert!(matches!(
            normalize(r#"{"html":"a","css":"b","js":0}"#),
            Err(NormalizeError::MissingField("js"))
        ));
    }

    #[test]
    fn is_idempotent_on_valid_json() {
        let first = normalize(r#"{"html":"a","css":"b","js":"c"}"#).unwrap();
        let rendered = serde_json::to_string(&serde_json::json!({
            "html": first.html, "css": first.css, "js": first.js,
        }))
        .unwrap();

        let second = normalize(&rendered).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn takes_widest_brace_span() {
        // A second object after the first widens the span and breaks the
        // parse. Known best-effort behavior, not specially handled.
        let raw = r#"{"html":"a","css":"b","js":"c"} and also {"note":"extra"}"#;
        assert!(matches!(normalize(raw), Err(NormalizeError::Parse(_))));
    }
}
