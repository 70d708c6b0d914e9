use regex::{Captures, Regex};
use std::sync::OnceLock;

fn entity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"&(?:(amp|lt|gt|quot|apos|nbsp)|#(x?)([0-9a-fA-F]+));")
            .expect("entity pattern is valid")
    })
}

/// Decodes the HTML entities Torre embeds in profile text.
///
/// Handles the common named entities plus decimal (`&#39;`) and hex (`&#x27;`)
/// references in a single pass, so `&amp;lt;` becomes `&lt;` rather than `<`.
/// References that do not name a valid character are left untouched.
pub fn decode_html_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    entity_pattern()
        .replace_all(text, |caps: &Captures| {
            if let Some(name) = caps.get(1) {
                return match name.as_str() {
                    "amp" => "&",
                    "lt" => "<",
                    "gt" => ">",
                    "quot" => "\"",
                    "apos" => "'",
                    _ => " ",
                }
                .to_string();
            }

            let radix = if &caps[2] == "x" { 16 } else { 10 };
            u32::from_str_radix(&caps[3], radix)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn decode_in_place(field: &mut Option<String>) {
    if let Some(text) = field.as_mut() {
        *text = decode_html_entities(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_entities() {
        assert_eq!(
            decode_html_entities("R&amp;D &lt;lead&gt; &quot;ops&quot; it&apos;s&nbsp;ok"),
            "R&D <lead> \"ops\" it's ok"
        );
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_html_entities("Jos&#233; O&#39;Neil"), "José O'Neil");
        assert_eq!(decode_html_entities("caf&#xe9;"), "café");
    }

    #[test]
    fn test_single_pass() {
        assert_eq!(decode_html_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_invalid_references_are_kept() {
        assert_eq!(decode_html_entities("&#xD800; and &#12ab;"), "&#xD800; and &#12ab;");
        assert_eq!(decode_html_entities("AT&T"), "AT&T");
    }

    #[test]
    fn test_decode_in_place() {
        let mut field = Some("Senior &amp; Lead".to_string());
        decode_in_place(&mut field);
        assert_eq!(field.as_deref(), Some("Senior & Lead"));

        let mut empty: Option<String> = None;
        decode_in_place(&mut empty);
        assert!(empty.is_none());
    }
}
