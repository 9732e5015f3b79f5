#![no_main]

//! Decision engine fuzzer.
//!
//! Builds arbitrary boards and turns, then checks that the chosen action
//! targets one of our active trees and applies cleanly.

use arbitrary::Arbitrary;
use canopy::{Board, Cell, CostModel, Engine, Tree, TreeSize, Turn};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated tree.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct FuzzTree {
    cell: u8,
    size: u8,
    is_mine: bool,
    is_dormant: bool,
}

/// Structured input for one decision.
#[derive(Arbitrary, Debug)]
struct DecisionInput {
    /// Richness per cell; the board has one cell per entry.
    richness: Vec<u8>,
    /// Trees, placed modulo the board size.
    trees: Vec<FuzzTree>,
    /// Our sun points.
    sun: u16,
    /// Price overrides.
    complete: u8,
    small_grow_base: u8,
    medium_grow_base: u8,
}

fuzz_target!(|input: DecisionInput| {
    if input.richness.is_empty() {
        return;
    }

    let cells = input
        .richness
        .iter()
        .enumerate()
        .map(|(i, &r)| Cell::new(i, u32::from(r)))
        .collect();
    let Some(board) = Board::from_cells(cells) else {
        return;
    };

    let mut turn = Turn::with_sun(u32::from(input.sun));
    for tree in &input.trees {
        let cell = usize::from(tree.cell) % board.len();
        let size = TreeSize::ALL[usize::from(tree.size) % 4];
        turn.trees.insert(
            cell,
            Tree {
                cell,
                size,
                is_mine: tree.is_mine,
                is_dormant: tree.is_dormant,
            },
        );
    }

    let engine = Engine::new(CostModel {
        complete: u32::from(input.complete),
        small_grow_base: u32::from(input.small_grow_base),
        medium_grow_base: u32::from(input.medium_grow_base),
        ..CostModel::default()
    });

    let before = turn.clone();
    let decision = engine
        .play_turn(&board, &mut turn)
        .expect("chosen action must apply");

    if let Some(cell) = decision.action.target() {
        let tree = before.tree(cell).expect("target must exist");
        assert!(tree.is_active_mine());
        assert_ne!(tree.size, TreeSize::Seed);
    } else {
        assert_eq!(turn, before);
    }
});
