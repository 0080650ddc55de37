//! Lyric extraction from Genius song pages.
//!
//! The lyrics are not exposed through the API, so they are pulled out of
//! the page HTML. The rules here are tied to the current page markup: the
//! classic `div.lyrics` container and the newer `data-lyrics-container`
//! blocks. If Genius changes its layout this module is the thing that
//! breaks.

use crate::foundation::utils::{strip_non_ascii, strip_section_markers};
use regex::Regex;

/// Extracts the lyric text from a song page.
///
/// Returns `None` when the page carries no recognizable lyrics markup,
/// which also covers instrumental tracks.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let without_scripts = Regex::new(r"(?is)<script.*?</script>")
        .unwrap()
        .replace_all(html, "");

    let raw = lyrics_container(&without_scripts)?;
    let text = html_to_text(&raw);

    let cleaned = strip_non_ascii(&strip_section_markers(&text));
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Pulls the inner HTML of the lyrics container(s) out of the page.
fn lyrics_container(html: &str) -> Option<String> {
    let classic = Regex::new(r#"(?is)<div[^>]*class="lyrics"[^>]*>(.*?)</div>"#).unwrap();
    if let Some(captures) = classic.captures(html) {
        return Some(captures[1].to_string());
    }

    let containers =
        Regex::new(r#"(?is)<div[^>]*data-lyrics-container="true"[^>]*>(.*?)</div>"#).unwrap();
    let blocks: Vec<String> = containers
        .captures_iter(html)
        .map(|captures| captures[1].to_string())
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n"))
    }
}

/// Flattens an HTML fragment into plain text.
fn html_to_text(fragment: &str) -> String {
    let with_breaks = Regex::new(r"(?i)<br\s*/?>|</p>|</div>")
        .unwrap()
        .replace_all(fragment, "\n");
    let stripped = Regex::new(r"<[^>]+>")
        .unwrap()
        .replace_all(&with_breaks, "");
    decode_entities(&stripped)
}

/// Decodes the handful of HTML entities that actually occur in lyric text.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC_PAGE: &str = r#"
        <html><head><script>var x = "noise";</script></head>
        <body>
        <div class="lyrics">
            <p>[Verse 1]<br>Into the night<br>We ride &amp; fall</p>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_extract_from_classic_markup() {
        let lyrics = extract_lyrics(CLASSIC_PAGE).unwrap();

        assert!(lyrics.contains("Into the night"));
        assert!(lyrics.contains("We ride & fall"));
        // Section markers and script content must be gone.
        assert!(!lyrics.contains("Verse"));
        assert!(!lyrics.contains("noise"));
    }

    #[test]
    fn test_extract_from_container_markup() {
        let html = r#"
            <div data-lyrics-container="true">First block<br>of lyrics</div>
            <div data-lyrics-container="true">Second block</div>
        "#;

        let lyrics = extract_lyrics(html).unwrap();
        assert!(lyrics.contains("First block"));
        assert!(lyrics.contains("Second block"));
    }

    #[test]
    fn test_page_without_lyrics_markup() {
        let html = "<html><body><div class=\"chart\">no lyrics here</div></body></html>";

        assert!(extract_lyrics(html).is_none());
    }

    #[test]
    fn test_marker_only_page_yields_none() {
        let html = r#"<div class="lyrics">[Instrumental]</div>"#;

        assert!(extract_lyrics(html).is_none());
    }

    #[test]
    fn test_non_ascii_is_stripped() {
        let html = "<div class=\"lyrics\">smart \u{2019}quotes\u{2019} stay out</div>";
        let lyrics = extract_lyrics(html).unwrap();

        assert!(lyrics.is_ascii());
    }
}
