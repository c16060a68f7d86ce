//! Property tests for the candidate walk on random small boards.

use std::collections::HashSet;

use proptest::prelude::*;
use wordhunt::config::SearchConfig;
use wordhunt::grid::Grid;
use wordhunt::solver::find_candidates;

/// Square boards of side 3 or 4 over a small alphabet, so words repeat often.
fn small_grid() -> impl Strategy<Value = Grid> {
    (3usize..=4).prop_flat_map(|size| {
        prop::collection::vec(prop::sample::select(vec!['a', 'b', 'e', 'r', 's', 't']), size * size).prop_map(
            move |letters| {
                let rows: Vec<String> = letters.chunks(size).map(|row| row.iter().collect()).collect();
                Grid::from_rows(&rows).unwrap()
            },
        )
    })
}

fn bounds() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=3).prop_flat_map(|min| (Just(min), min..=5))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_candidate_is_a_walk_spelling_itself(grid in small_grid(), (min, max) in bounds()) {
        let enumeration = find_candidates(&grid, &SearchConfig::with_lengths(min, max)).unwrap();
        prop_assert!(!enumeration.timed_out);
        for word in enumeration.registry.words() {
            let path = enumeration.registry.path_for(word).unwrap();
            prop_assert!(path.is_walk());
            prop_assert_eq!(path.len(), word.len());
            let spelled = path.spell(&grid).unwrap();
            prop_assert_eq!(spelled.as_str(), &**word);
            prop_assert!((min..=max).contains(&word.len()));
        }
    }

    #[test]
    fn candidates_are_unique(grid in small_grid(), (min, max) in bounds()) {
        let enumeration = find_candidates(&grid, &SearchConfig::with_lengths(min, max)).unwrap();
        let words = enumeration.registry.words();
        let unique: HashSet<&str> = words.iter().map(|w| &**w).collect();
        prop_assert_eq!(unique.len(), words.len());
        prop_assert_eq!(words.len(), enumeration.registry.len());
    }

    #[test]
    fn enumeration_is_deterministic(grid in small_grid(), (min, max) in bounds()) {
        let config = SearchConfig::with_lengths(min, max);
        let first = find_candidates(&grid, &config).unwrap();
        let second = find_candidates(&grid, &config).unwrap();
        prop_assert_eq!(first.registry.words(), second.registry.words());
        prop_assert_eq!(first.walks_explored, second.walks_explored);
        for word in first.registry.words() {
            prop_assert_eq!(first.registry.path_for(word).unwrap(), second.registry.path_for(word).unwrap());
        }
    }

    #[test]
    fn every_single_cell_is_a_candidate(grid in small_grid()) {
        let enumeration = find_candidates(&grid, &SearchConfig::with_lengths(1, 1)).unwrap();
        let expected: HashSet<String> = grid.to_string().chars().filter(char::is_ascii_uppercase).map(|c| c.to_ascii_lowercase().to_string()).collect();
        let found: HashSet<String> = enumeration.registry.words().iter().map(|w| w.to_string()).collect();
        prop_assert_eq!(found, expected);
        prop_assert_eq!(enumeration.walks_explored, (grid.size() * grid.size()) as u64);
    }
}
