//! Normalization of the greeting target.

/// Titlecases the first character and lowercases the rest.
///
/// The rest is lowercased with the whole value as context, so a word-final
/// `Σ` becomes `ς`. Empty input gives an empty string. Whitespace is kept
/// as-is, so a leading space means nothing gets titlecased.
///
/// # Examples
///
/// ```
/// use greet_universe::universe::capitalize;
///
/// assert_eq!(capitalize("world"), "World");
/// assert_eq!(capitalize("DUMBLEDORE"), "Dumbledore");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(value: &str) -> String {
    let Some(first) = value.chars().next() else {
        return String::new();
    };

    let lower = value.to_lowercase();
    let skip: usize = first.to_lowercase().map(char::len_utf8).sum();

    let mut out = titlecase(first);
    out.push_str(lower.get(skip..).unwrap_or_default());
    out
}

/// Titlecase mapping of a single character, which may expand (`ß` -> `Ss`).
fn titlecase(c: char) -> String {
    let mapped: String = unicode_case_mapping::to_titlecase(c)
        .into_iter()
        .filter(|&code| code != 0)
        .filter_map(char::from_u32)
        .collect();

    if mapped.is_empty() {
        c.to_string()
    } else {
        mapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_word() {
        assert_eq!(capitalize("world"), "World");
        assert_eq!(capitalize("dumbledore"), "Dumbledore");
    }

    #[test]
    fn uppercase_word_is_lowered_after_first_char() {
        assert_eq!(capitalize("ALICE"), "Alice");
        assert_eq!(capitalize("DUMBLEDORE"), "Dumbledore");
    }

    #[test]
    fn already_capitalized_is_unchanged() {
        assert_eq!(capitalize("World"), "World");
        assert_eq!(capitalize(&capitalize("mIxEd")), capitalize("mIxEd"));
    }

    #[test]
    fn empty_and_single_char() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("Z"), "Z");
    }

    /// Only the first character counts, so later words stay lowercase.
    #[test]
    fn multiple_words_are_not_title_cased() {
        assert_eq!(capitalize("the GREAT beyond"), "The great beyond");
    }

    #[test]
    fn leading_non_letter_is_kept() {
        assert_eq!(capitalize(" world"), " world");
        assert_eq!(capitalize("1ST PLACE"), "1st place");
        assert_eq!(capitalize("\"dumbledore\""), "\"dumbledore\"");
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(capitalize("éCOLE"), "École");
        assert_eq!(capitalize("ΣΟΦΙΑ"), "Σοφια");
    }

    /// Greek final sigma depends on the letter before it.
    #[test]
    fn final_sigma_uses_whole_word_context() {
        assert_eq!(capitalize("ΑΣ"), "Ας");
        assert_eq!(capitalize("ΟΔΟΣ"), "Οδος");
    }

    /// The first character is titlecased, not uppercased.
    #[test]
    fn first_char_uses_titlecase() {
        assert_eq!(capitalize("ßtraße"), "Sstraße");
        assert_eq!(capitalize("ǆemal"), "ǅemal");
        assert_eq!(capitalize("ǄEMAL"), "ǅemal");
        assert_eq!(capitalize("ﬁsh"), "Fish");
    }
}
