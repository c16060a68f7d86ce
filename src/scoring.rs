//! Points per word. Both game modes score on length alone.

/// Which game's table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    WordHunt,
    Anagram,
}

impl ScoringMode {
    #[must_use]
    pub fn points(self, len: usize) -> u32 {
        match self {
            ScoringMode::WordHunt => word_hunt_points(len),
            ScoringMode::Anagram => anagram_points(len),
        }
    }
}

/// Word Hunt: one point per letter, plus a cumulative bonus at 4, 5 and 6 letters.
#[must_use]
fn word_hunt_points(len: usize) -> u32 {
    let base = u32::try_from(len).unwrap_or(u32::MAX);
    let bonus = [4, 5, 6].iter().filter(|&&threshold| len >= threshold).count();
    // bonus is at most 3
    base.saturating_add(bonus as u32)
}

/// Anagrams (six-tile game): fixed table, nothing for other lengths.
#[must_use]
fn anagram_points(len: usize) -> u32 {
    match len {
        3 => 100,
        4 => 400,
        5 => 1200,
        6 => 2000,
        _ => 0,
    }
}
