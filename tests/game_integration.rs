//! End-to-end tests: referee input in, action lines out.
//!
//! These tests drive the full session loop over in-memory streams and replay
//! transcript files written to a temporary directory.
//!
//! Run with: cargo test game_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fmt::Write as _;
use std::io::{Cursor, Write};

use canopy::{Action, CostModel, Engine, Reason, Session, SessionError, Transcript};

/// Startup block for a board of `richness.len()` cells with no neighbours.
fn board_block(richness: &[u32]) -> String {
    let mut block = format!("{}\n", richness.len());
    for (i, r) in richness.iter().enumerate() {
        writeln!(block, "{i} {r} -1 -1 -1 -1 -1 -1").unwrap();
    }
    block
}

/// One turn block. Trees are `(cell, size, mine, dormant)`.
fn turn_block(day: u32, sun: u32, trees: &[(usize, u8, bool, bool)]) -> String {
    let mut block = format!("{day}\n20\n{sun} 0\n0 0 0\n{}\n", trees.len());
    for &(cell, size, mine, dormant) in trees {
        writeln!(block, "{cell} {size} {} {}", u8::from(mine), u8::from(dormant)).unwrap();
    }
    // The referee lists possible moves; the bot ignores them.
    block.push_str("2\nWAIT\nGROW 0\n");
    block
}

fn play(input: &str) -> String {
    let mut output = Vec::new();
    Session::new(Cursor::new(input.as_bytes()), &mut output, Engine::default())
        .run()
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_complete_richest_of_two_large_trees() {
    let input = board_block(&[1, 3]) + &turn_block(0, 10, &[(0, 3, true, false), (1, 3, true, false)]);
    assert_eq!(play(&input), "COMPLETE 1\n");
}

#[test]
fn test_complete_beats_grow_regardless_of_richness() {
    let input = board_block(&[1, 3]) + &turn_block(0, 10, &[(0, 3, true, false), (1, 2, true, false)]);
    assert_eq!(play(&input), "COMPLETE 0\n");
}

#[test]
fn test_no_owned_trees_waits() {
    let input = board_block(&[1, 3]) + &turn_block(0, 50, &[(0, 3, false, false)]);
    assert_eq!(play(&input), "WAIT\n");
}

#[test]
fn test_whole_game_one_line_per_turn() {
    let board = board_block(&[3, 2, 1, 0]);
    let turns = [
        turn_block(0, 2, &[(0, 1, true, false), (3, 1, false, false)]),
        turn_block(1, 5, &[(0, 1, true, false), (3, 1, false, false)]),
        turn_block(2, 9, &[(0, 2, true, false), (1, 1, true, false), (3, 2, false, false)]),
        turn_block(3, 8, &[(0, 3, true, true), (1, 1, true, false), (3, 2, false, false)]),
        turn_block(4, 6, &[(0, 3, true, false), (1, 2, true, false)]),
    ];
    let input = board + &turns.concat();

    assert_eq!(
        play(&input),
        "WAIT\nGROW 0\nGROW 0\nGROW 1\nCOMPLETE 0\n"
    );
}

#[test]
fn test_truncated_input_is_fatal() {
    let mut input = board_block(&[1]) + &turn_block(0, 10, &[]);
    input.push_str("1\n20\n");

    let mut output = Vec::new();
    let result = Session::new(Cursor::new(input.as_bytes()), &mut output, Engine::default()).run();

    assert_eq!(String::from_utf8(output).unwrap(), "WAIT\n");
    let err = result.unwrap_err();
    assert!(matches!(err, SessionError::Protocol(_)));
    assert!(err.to_string().contains("line"));
}

#[test]
fn test_transcript_file_replay() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(board_block(&[1, 3]).as_bytes()).unwrap();
    file.write_all(turn_block(0, 3, &[(1, 1, true, false)]).as_bytes()).unwrap();
    file.write_all(turn_block(1, 2, &[(1, 1, true, false)]).as_bytes()).unwrap();
    drop(file);

    let transcript = Transcript::load(&path).unwrap();
    assert!(transcript.violations().is_empty());

    let records = transcript.replay(&Engine::default()).unwrap();
    let actions: Vec<_> = records.iter().map(|r| r.action).collect();
    assert_eq!(actions, vec![Action::Grow { cell: 1 }, Action::Wait]);
    assert_eq!(records[1].reason, Reason::NothingAffordable);

    // A cheaper price list changes the second answer.
    let cheap = Engine::new(CostModel {
        small_grow_base: 2,
        ..CostModel::default()
    });
    let records = transcript.replay(&cheap).unwrap();
    assert_eq!(records[1].action, Action::Grow { cell: 1 });
}

#[test]
fn test_transcript_with_dangling_neighbour_is_flagged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    std::fs::write(&path, "1\n0 3 4 -1 -1 -1 -1 -1\n").unwrap();

    let transcript = Transcript::load(&path).unwrap();
    assert!(transcript.turns.is_empty());
    assert_eq!(transcript.violations().len(), 1);
}
