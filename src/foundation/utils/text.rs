use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalizes Unicode characters and converts text to lowercase.
///
/// This function takes a string slice, decomposes its Unicode characters
/// (NFD normalization), and then converts the result to lowercase. Cache
/// lookups use this so that different Unicode representations of the same
/// artist name resolve to the same entry.
///
/// # Examples
///
/// ```
/// use lyricstats::foundation::utils::normalize_unicode;
///
/// assert_eq!(normalize_unicode("MOTÖRHEAD"), normalize_unicode("Motörhead"));
/// ```
pub fn normalize_unicode(input: &str) -> String {
    input.nfd().collect::<String>().to_lowercase()
}

/// Turns an artist name into a safe file name.
///
/// Every character outside `[A-Za-z0-9._-]` becomes an underscore, so names
/// containing slashes, quotes or other shell-hostile characters cannot
/// escape the cache directory.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Removes section markers like "[Chorus]" or "[Verse 1]" from lyric text.
///
/// Genius lyric pages annotate song structure with bracketed markers. They
/// are not lyrics and would pollute the word counts.
pub fn strip_section_markers(text: &str) -> String {
    let re = Regex::new(r"\[.*?\]").unwrap();
    re.replace_all(text, "").into_owned()
}

/// Drops every non-ASCII character from the text.
///
/// Lyric pages occasionally embed typographic quotes, zero-width spaces and
/// other decorations that would otherwise show up as distinct "words".
pub fn strip_non_ascii(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_normalization::UnicodeNormalization;

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize_unicode("Björk"), "björk".nfd().collect::<String>());
        assert_eq!(normalize_unicode("MOTÖRHEAD"), normalize_unicode("Motörhead"));
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Guns N' Roses"), "Guns_N__Roses");
        assert_eq!(sanitize_file_name("AC/DC"), "AC_DC");
        assert_eq!(sanitize_file_name("plain-name_1.0"), "plain-name_1.0");
    }

    #[test]
    fn test_strip_section_markers() {
        assert_eq!(
            strip_section_markers("[Verse 1]\nhello world\n[Chorus]\ngoodbye"),
            "\nhello world\n\ngoodbye"
        );
        assert_eq!(strip_section_markers("no markers here"), "no markers here");
    }

    #[test]
    fn test_strip_non_ascii() {
        assert_eq!(strip_non_ascii("smart \u{201c}quotes\u{201d}"), "smart quotes");
        assert_eq!(strip_non_ascii("plain"), "plain");
    }
}
