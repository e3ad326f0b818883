//! Tests for the pure dense-ordering helpers.

use rstest::rstest;

use crate::board::domain::ordering::{Sequenced, renumber, reorder, transfer};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Item {
    label: char,
    position: usize,
}

impl Sequenced for Item {
    fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

fn items(labels: &str) -> Vec<Item> {
    labels
        .chars()
        .enumerate()
        .map(|(position, label)| Item { label, position })
        .collect()
}

fn labels(sequence: &[Item]) -> String {
    sequence.iter().map(|item| item.label).collect()
}

fn assert_dense(sequence: &[Item]) {
    let positions: Vec<usize> = sequence.iter().map(|item| item.position).collect();
    let expected: Vec<usize> = (0..sequence.len()).collect();
    assert_eq!(positions, expected);
}

#[rstest]
#[case("abcd", 0, 2, "bcad")]
#[case("abcd", 3, 0, "dabc")]
#[case("abcd", 1, 3, "acdb")]
fn reorder_moves_and_renumbers(
    #[case] input: &str,
    #[case] from: usize,
    #[case] to: usize,
    #[case] expected: &str,
) {
    let moved = reorder(items(input), from, to);
    assert_eq!(labels(&moved), expected);
    assert_dense(&moved);
}

#[rstest]
fn reorder_to_same_index_is_identity() {
    let input = items("abc");
    let moved = reorder(input.clone(), 1, 1);
    assert_eq!(moved, input);
}

#[rstest]
fn reorder_clamps_target_past_end() {
    let moved = reorder(items("abc"), 0, 99);
    assert_eq!(labels(&moved), "bca");
    assert_dense(&moved);
}

#[rstest]
fn reorder_ignores_out_of_bounds_source() {
    let input = items("abc");
    let moved = reorder(input.clone(), 7, 0);
    assert_eq!(moved, input);
}

#[rstest]
fn transfer_moves_between_sequences() {
    let (source, dest) = transfer(items("abc"), items("xy"), 1, 1);
    assert_eq!(labels(&source), "ac");
    assert_eq!(labels(&dest), "xby");
    assert_dense(&source);
    assert_dense(&dest);
}

#[rstest]
fn transfer_into_empty_destination() {
    let (source, dest) = transfer(items("ab"), items(""), 0, 0);
    assert_eq!(labels(&source), "b");
    assert_eq!(labels(&dest), "a");
    assert_dense(&source);
    assert_dense(&dest);
}

#[rstest]
fn transfer_appends_when_target_past_end() {
    let (source, dest) = transfer(items("ab"), items("xy"), 0, 42);
    assert_eq!(labels(&dest), "xya");
    assert_dense(&source);
    assert_dense(&dest);
}

#[rstest]
fn transfer_ignores_out_of_bounds_source() {
    let (source, dest) = transfer(items("ab"), items("xy"), 5, 0);
    assert_eq!(labels(&source), "ab");
    assert_eq!(labels(&dest), "xy");
}

#[rstest]
fn density_holds_across_operation_sequences() {
    let mut left = items("abcde");
    let mut right = items("vwxyz");
    let moves: [(usize, usize); 6] = [(0, 4), (3, 0), (2, 2), (4, 1), (1, 9), (0, 3)];

    for (from, to) in moves {
        left = reorder(left, from, to);
        let (new_left, new_right) = transfer(left, right, from.min(4), to);
        left = new_left;
        right = new_right;
        let (new_right, new_left) = transfer(right, left, to.min(4), from);
        right = new_right;
        left = new_left;
        assert_dense(&left);
        assert_dense(&right);
    }
    assert_eq!(left.len() + right.len(), 10);
}

#[rstest]
fn renumber_rewrites_arbitrary_positions() {
    let mut sequence = vec![
        Item {
            label: 'a',
            position: 9,
        },
        Item {
            label: 'b',
            position: 9,
        },
        Item {
            label: 'c',
            position: 0,
        },
    ];
    renumber(&mut sequence);
    assert_dense(&sequence);
    assert_eq!(labels(&sequence), "abc");
}
