//! SSML document construction for synthesis requests.

/// Build the SSML body for one synthesis call.
pub(crate) fn build_ssml(text: &str, voice: &str, lang: &str) -> String {
    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{lang}'>\
         <voice name='{voice}'>{}</voice></speak>",
        escape_xml(text)
    )
}

/// Escape the five XML special characters.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssml_wraps_text_in_voice_element() {
        let ssml = build_ssml("hello world", "en-US-GuyNeural", "en-US");
        assert!(ssml.starts_with("<speak version='1.0'"));
        assert!(ssml.contains("<voice name='en-US-GuyNeural'>hello world</voice>"));
        assert!(ssml.contains("xml:lang='en-US'"));
    }

    #[test]
    fn special_characters_are_escaped() {
        let ssml = build_ssml("cats & <dogs>", "en-US-JennyNeural", "en-US");
        assert!(ssml.contains("cats &amp; &lt;dogs&gt;"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(escape_xml(r#"it's "fine""#), "it&apos;s &quot;fine&quot;");
    }
}
