//! Address normalization.
//!
//! Road addresses in the hospital table and the locations typed by users
//! differ in spacing, house numbers and whether the province-level city
//! carries its administrative suffix ("대전광역시" vs "대전"). Both sides are
//! reduced to the same canonical form before comparison:
//!
//! 1. every character outside the Hangul syllable block (U+AC00..=U+D7A3) is
//!    removed, which drops digits, Latin letters, punctuation and whitespace;
//! 2. the administrative-unit markers in [`ADMINISTRATIVE_UNITS`] are removed
//!    wherever they occur, repeatedly, until none is left.
//!
//! The result is idempotent: `normalize(&normalize(x)) == normalize(x)`.
//!
//! # Examples
//!
//! ```
//! use carematch::address::normalize;
//!
//! assert_eq!(normalize("대전광역시 서구 관저동 123-45"), "대전서구관저동");
//! assert_eq!(normalize("서울특별시 종로구 대학로 101"), "서울종로구대학로");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

/// Administrative-unit markers stripped from normalized addresses.
pub const ADMINISTRATIVE_UNITS: [&str; 2] = ["광역시", "특별시"];

lazy_static! {
    static ref NON_SYLLABLE: Regex = Regex::new(r"[^가-힣]").unwrap();
}

/// Canonicalize an address string for comparison.
pub fn normalize(address: &str) -> String {
    let mut normalized = NON_SYLLABLE.replace_all(address, "").into_owned();

    // Removing one marker can join its neighbours into another one
    // ("광광역시역시"), so strip until a full pass changes nothing.
    loop {
        let before = normalized.len();
        for unit in ADMINISTRATIVE_UNITS {
            if normalized.contains(unit) {
                normalized = normalized.replace(unit, "");
            }
        }
        if normalized.len() == before {
            return normalized;
        }
    }
}

/// Whether `c` is a precomposed Hangul syllable.
pub fn is_syllable(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metropolitan_city_example() {
        assert_eq!(normalize("대전광역시 서구 관저동 123-45"), "대전서구관저동");
        assert_eq!(normalize("대전 서구 관저동 99"), "대전서구관저동");
    }

    #[test]
    fn test_special_city_removed() {
        assert_eq!(normalize("서울특별시 강남구"), "서울강남구");
    }

    #[test]
    fn test_drops_latin_digits_and_punctuation() {
        assert_eq!(normalize("부산 (Busan) 해운대구, 12층 #3"), "부산해운대구층");
        assert_eq!(normalize("123-45 ABC !?"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_drops_compatibility_jamo() {
        // Standalone jamo are outside the syllable block.
        assert_eq!(normalize("ㅎㅎ대구ㅋ"), "대구");
    }

    #[test]
    fn test_nested_markers_removed() {
        assert_eq!(normalize("광광역시역시"), "");
        assert_eq!(normalize("대광특별시역시전"), "대전");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "대전광역시 서구 관저동 123-45",
            "세종시 대전서구관저동로",
            "광광역시역시 특특별시별시",
            "울산 광역 시",
            "Seoul 특별 시 중구",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_output_character_class() {
        let samples = ["인천광역시 남동구 (구월동) 1234", "a광b역c시d", "제주특별자치도 제주시"];
        for sample in samples {
            let normalized = normalize(sample);
            assert!(normalized.chars().all(is_syllable));
            for unit in ADMINISTRATIVE_UNITS {
                assert!(!normalized.contains(unit));
            }
        }
    }
}
