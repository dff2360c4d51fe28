/// Text helpers shared by the catalog filters and the landing page.
///
/// Filter tokens in the URL are always slugs, while product fields and
/// form control values carry display labels. `slugify` is the bridge
/// between the two.
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks left behind by NFD decomposition
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Default length for [`truncate_default`]
pub const DEFAULT_TRUNCATE_LENGTH: usize = 160;

/// File name without directories and without the last extension.
/// Example: "/src/assets/produk/DIYYK01.jpg" -> "DIYYK01"
pub fn basename(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or_default();
    match name.rsplit_once('.') {
        Some((stem, _ext)) => stem.to_string(),
        None => name.to_string(),
    }
}

/// Uppercase the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title case: split on whitespace, `-` and `_`, then capitalize every word.
/// Example: "kota_yogya-karta" -> "Kota Yogya Karta"
pub fn capitalize_all(s: &str) -> String {
    s.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(&word.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// URL-friendly kebab-case.
/// Example: "Kab. Gunung Kidul" -> "kab-gunung-kidul", "Señor  Café" -> "senor-cafe"
pub fn slugify(s: &str) -> String {
    let kept: String = s
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for c in kept.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        } else {
            slug.push(c.to_ascii_lowercase());
        }
    }
    slug
}

/// Inverse of [`slugify`] up to case and separators.
/// Example: "kab-gunung-kidul" -> "Kab Gunung Kidul"
pub fn unslugify(s: &str) -> String {
    capitalize_all(&s.replace('-', " "))
}

/// Cut `s` to at most `length` characters, ending with "..."
pub fn truncate(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }
    let head: String = s.chars().take(length.saturating_sub(3)).collect();
    format!("{}...", head.trim())
}

pub fn truncate_default(s: &str) -> String {
    truncate(s, DEFAULT_TRUNCATE_LENGTH)
}

/// Alt text derived from an image path
pub fn pretty_img_alt(path: &str) -> String {
    unslugify(&basename(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Baliho"), "baliho");
        assert_eq!(slugify("Kab. Gunung Kidul"), "kab-gunung-kidul");
        assert_eq!(slugify("  Kota   Yogyakarta  "), "kota-yogyakarta");
        assert_eq!(slugify("Señor Café"), "senor-cafe");
        assert_eq!(slugify("a - - b"), "a-b");
        assert_eq!(slugify("4x6"), "4x6");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_unslugify() {
        assert_eq!(unslugify("kab-gunung-kidul"), "Kab Gunung Kidul");
        assert_eq!(unslugify("videotron"), "Videotron");
        assert_eq!(unslugify(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("sleman"), "Sleman");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize_all("KOTA_yogya-karta"), "Kota Yogya Karta");
    }

    #[test]
    fn test_basename_and_alt() {
        assert_eq!(basename("/src/assets/produk/DIYYK01.jpg"), "DIYYK01");
        assert_eq!(basename("archive.tar.gz"), "archive.tar");
        assert_eq!(basename("folder/"), "");
        assert_eq!(basename("README"), "README");
        assert_eq!(pretty_img_alt("/src/assets/hero/billboard-jalan_malioboro.webp"), "Billboard Jalan Malioboro");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("pendek", 10), "pendek");
        assert_eq!(truncate("abcdefghij", 10), "abcdefghij");
        assert_eq!(truncate("abcd efghijk", 8), "abcd...");
        let long = "x".repeat(200);
        assert_eq!(truncate_default(&long).chars().count(), DEFAULT_TRUNCATE_LENGTH);
    }

    proptest! {
        #[test]
        fn slugify_is_idempotent(s in "\\PC{0,48}") {
            let once = slugify(&s);
            prop_assert_eq!(slugify(&once), once.clone());
        }

        #[test]
        fn slug_only_contains_url_safe_chars(s in "\\PC{0,48}") {
            let slug = slugify(&s);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn unslugify_restores_words(words in proptest::collection::vec("[a-zA-Z0-9]{1,8}", 1..5)) {
            let original = words.join(" ");
            let restored = unslugify(&slugify(&original));
            prop_assert_eq!(restored.to_lowercase(), original.to_lowercase());
            prop_assert_eq!(slugify(&restored), slugify(&original));
        }
    }
}
