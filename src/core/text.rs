use regex::{
    NoExpand,
    RegexBuilder,
};

/// Wraps every case-insensitive occurrence of `word` in `<b>..</b>`.
/// Matches are replaced with the lowercase form, everything else is untouched.
pub fn bold_occurrences(text: &str, word: &str) -> String {
    let pattern = match RegexBuilder::new(&regex::escape(word)).case_insensitive(true).build() {
        Ok(re) => re,
        Err(_) => return text.to_string(),
    };

    let replacement = format!("<b>{}</b>", word);
    pattern.replace_all(text, NoExpand(&replacement)).into_owned()
}

/// Removes the bold markup added by `bold_occurrences`, for audio synthesis.
pub fn strip_bold(text: &str) -> String {
    text.replace("<b>", "").replace("</b>", "")
}

/// Field values like `[sound:x.mp3]` or `<b>word</b>` are markup, not vocabulary.
pub fn looks_like_markup(value: &str) -> bool {
    value.contains('<') || value.contains('[')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bolds_every_occurrence_case_insensitively() {
        let result = bold_occurrences("Test the test before testing.", "test");
        assert_eq!(result, "<b>test</b> the <b>test</b> before <b>test</b>ing.");
    }

    #[test]
    fn leaves_non_matching_text_untouched() {
        assert_eq!(bold_occurrences("nothing here", "absent"), "nothing here");
    }

    #[test]
    fn escapes_regex_metacharacters_in_word() {
        assert_eq!(bold_occurrences("a+b is a+b", "a+b"), "<b>a+b</b> is <b>a+b</b>");
    }

    #[test]
    fn strip_bold_removes_markup_only() {
        assert_eq!(strip_bold("This is a <b>test</b> case."), "This is a test case.");
    }

    #[test]
    fn markup_detection() {
        assert!(looks_like_markup("[sound:user_apple.mp3]"));
        assert!(looks_like_markup("<b>apple</b>"));
        assert!(!looks_like_markup("apple"));
    }
}
