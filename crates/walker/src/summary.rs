use std::path::Path;

/// Description documents, in lookup priority order.
const DESCRIPTION_FILES: &[&str] = &["README.md", "README.rst", "README.txt", "README"];

const ELLIPSIS: &str = "...";

/// Read the repository description from the first matching document under
/// `root`. Content longer than `cap` characters is truncated to exactly
/// `cap` characters with an ellipsis marker appended. Returns an empty
/// string when no document exists or none is readable.
pub fn read_description(root: impl AsRef<Path>, cap: usize) -> String {
    let root = root.as_ref();

    for name in DESCRIPTION_FILES {
        let path = root.join(name);
        if !path.is_file() {
            continue;
        }
        match std::fs::read(&path) {
            Ok(bytes) => {
                // Lossy decode: a stray invalid byte must not cost us the
                // whole description.
                return truncate_chars(&String::from_utf8_lossy(&bytes), cap);
            }
            Err(err) => {
                log::warn!("failed to read {}: {err}", path.display());
            }
        }
    }

    String::new()
}

/// Character-based truncation; byte slicing could split a UTF-8 sequence.
fn truncate_chars(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((idx, _)) => format!("{}{ELLIPSIS}", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        let text = "a".repeat(400);
        assert_eq!(truncate_chars(&text, 500), text);
    }

    #[test]
    fn exact_cap_is_untouched() {
        let text = "b".repeat(500);
        assert_eq!(truncate_chars(&text, 500), text);
    }

    #[test]
    fn long_text_is_capped_with_ellipsis() {
        let text = "c".repeat(600);
        let out = truncate_chars(&text, 500);
        assert_eq!(out.chars().count(), 503);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..500], "c".repeat(500));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "é".repeat(600);
        let out = truncate_chars(&text, 500);
        assert_eq!(out.chars().count(), 503);
        assert!(out.ends_with("..."));
    }
}
