use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

pub(crate) trait GridChar {
    /// A letter that may sit in a grid cell once lowercased.
    fn is_grid_letter(&self) -> bool;
    /// Index into a 26-slot table, `None` for anything outside `a..=z`.
    fn letter_index(&self) -> Option<usize>;
}

impl GridChar for char {
    fn is_grid_letter(&self) -> bool {
        self.is_ascii_alphabetic()
    }
    fn letter_index(&self) -> Option<usize> {
        if LOWERCASE_ALPHABET.contains(self) {
            Some(*self as usize - 'a' as usize)
        } else {
            None
        }
    }
}

/// Keep only `a..=z` after lowercasing.
pub(crate) fn normalize_letters(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Multiset of lowercase letters, used to test whether a word can be
/// spelled from a pool of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// Count the letters of `s`; `None` if `s` holds anything outside `a..=z`.
    pub(crate) fn from_word(s: &str) -> Option<Self> {
        let mut counts = [0u8; ALPHABET_SIZE];
        for c in s.chars() {
            let i = c.letter_index()?;
            counts[i] = counts[i].saturating_add(1);
        }
        Some(LetterCounts(counts))
    }

    /// True if every letter of `self` is available (with multiplicity) in `pool`.
    pub(crate) fn fits_within(&self, pool: &LetterCounts) -> bool {
        self.0.iter().zip(pool.0.iter()).all(|(need, have)| need <= have)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_grid_letter() {
        assert!('a'.is_grid_letter());
        assert!('Z'.is_grid_letter());
        assert!(!'1'.is_grid_letter());
        assert!(!' '.is_grid_letter());
        assert!(!'é'.is_grid_letter());
    }

    #[test]
    fn test_letter_index_covers_alphabet() {
        for (i, c) in LOWERCASE_ALPHABET.enumerate() {
            assert_eq!(c.letter_index(), Some(i));
        }
        assert_eq!('A'.letter_index(), None);
        assert_eq!('-'.letter_index(), None);
    }

    #[test]
    fn test_normalize_letters() {
        assert_eq!(normalize_letters("Game Pigeon!"), "gamepigeon");
        assert_eq!(normalize_letters("123"), "");
    }

    #[test]
    fn test_fits_within_respects_multiplicity() {
        let pool = LetterCounts::from_word("area").unwrap();
        assert!(LetterCounts::from_word("era").unwrap().fits_within(&pool));
        assert!(LetterCounts::from_word("aa").unwrap().fits_within(&pool));
        assert!(!LetterCounts::from_word("aaa").unwrap().fits_within(&pool));
        assert!(!LetterCounts::from_word("ear").unwrap().fits_within(&LetterCounts::from_word("ea").unwrap()));
    }

    #[test]
    fn test_from_word_rejects_non_letters() {
        assert!(LetterCounts::from_word("it's").is_none());
        assert!(LetterCounts::from_word("Cat").is_none());
        assert_eq!(LetterCounts::from_word(""), Some(LetterCounts::default()));
    }
}
