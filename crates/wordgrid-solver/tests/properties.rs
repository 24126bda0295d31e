//! Property tests checking the searches against brute force.

use std::{collections::BTreeSet, num::NonZeroUsize};

use proptest::prelude::*;
use wordgrid_core::{Board, Lexicon};
use wordgrid_solver::WordFinder;

const MAX_WORD_LEN: usize = 4;

fn board_strategy() -> impl Strategy<Value = Board> {
    (1usize..=3).prop_flat_map(|size| {
        prop::collection::vec("[a-c]", size * size)
            .prop_map(|tiles| Board::new(tiles).expect("square by construction"))
    })
}

fn lexicon_strategy() -> impl Strategy<Value = Lexicon> {
    prop::collection::vec("[a-c]{1,4}", 0..30).prop_map(|words| words.into_iter().collect())
}

/// Every string spelled by a simple path of at most `MAX_WORD_LEN` cells.
fn spellable(board: &Board) -> BTreeSet<String> {
    fn extend(board: &Board, path: &mut Vec<usize>, out: &mut BTreeSet<String>) {
        out.insert(board.word_along(path).expect("indices are on the board"));
        if path.len() == MAX_WORD_LEN {
            return;
        }
        let last = *path.last().expect("path is never empty here");
        for next in board.indices() {
            if board.are_adjacent(last, next) && !path.contains(&next) {
                path.push(next);
                extend(board, path, out);
                path.pop();
            }
        }
    }

    let mut out = BTreeSet::new();
    for start in board.indices() {
        extend(board, &mut vec![start], &mut out);
    }
    out
}

proptest! {
    #[test]
    fn test_enumeration_matches_brute_force(
        board in board_strategy(),
        lexicon in lexicon_strategy(),
        min_length in 1usize..=3,
    ) {
        let min_length = NonZeroUsize::new(min_length).unwrap();
        let finder = WordFinder::new(&board, &lexicon);
        let spellable = spellable(&board);
        let expected = lexicon
            .iter()
            .filter(|word| word.chars().count() >= min_length.get() && spellable.contains(*word))
            .map(str::to_owned)
            .collect::<BTreeSet<_>>();
        prop_assert_eq!(finder.all_valid_words(min_length), expected);
    }

    #[test]
    fn test_enumerated_words_have_paths(
        board in board_strategy(),
        lexicon in lexicon_strategy(),
    ) {
        let finder = WordFinder::new(&board, &lexicon);
        for word in finder.all_valid_words(NonZeroUsize::MIN) {
            prop_assert!(lexicon.contains(&word));
            let path = finder.find_path(&word);
            prop_assert!(path.is_some(), "no path for {:?}", word);
            let path = path.unwrap();
            prop_assert!(path.is_traceable(&board, &word), "bad path {:?} for {:?}", path, word);
        }
    }

    #[test]
    fn test_find_path_agrees_with_brute_force(
        board in board_strategy(),
        lexicon in lexicon_strategy(),
        word in "[a-cA-C]{1,4}",
    ) {
        let finder = WordFinder::new(&board, &lexicon);
        let lower = word.to_lowercase();
        let reachable = lexicon.has_prefix(&lower) && spellable(&board).contains(&lower);
        match finder.find_path(&word) {
            Some(path) => {
                prop_assert!(reachable);
                prop_assert!(path.is_traceable(&board, &word));
            }
            None => prop_assert!(!reachable),
        }
    }

    #[test]
    fn test_enumeration_is_idempotent(
        board in board_strategy(),
        lexicon in lexicon_strategy(),
    ) {
        let finder = WordFinder::new(&board, &lexicon);
        let first = finder.all_valid_words_with_stats(NonZeroUsize::MIN);
        let second = finder.all_valid_words_with_stats(NonZeroUsize::MIN);
        prop_assert_eq!(first, second);
    }
}
