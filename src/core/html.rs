/// Escape text for insertion into HTML element content or attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape_html("<b>AI</b>"), "&lt;b&gt;AI&lt;/b&gt;");
        assert_eq!(escape_html("Tom & \"Jerry's\""), "Tom &amp; &quot;Jerry&#39;s&quot;");
    }

    #[test]
    fn ampersand_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(escape_html("Cloud Computing Benefits"), "Cloud Computing Benefits");
    }
}
