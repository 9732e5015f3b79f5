//! Reader for the referee's line protocol.
//!
//! Startup block:
//!
//! ```text
//! numberOfCells
//! index richness neigh0 neigh1 neigh2 neigh3 neigh4 neigh5   (x numberOfCells)
//! ```
//!
//! Turn block:
//!
//! ```text
//! day
//! nutrients
//! sun score
//! oppSun oppScore oppIsWaiting
//! numberOfTrees
//! cellIndex size isMine isDormant                          (x numberOfTrees)
//! numberOfPossibleActions
//! possibleAction                                           (x numberOfPossibleActions, ignored)
//! ```
//!
//! A neighbour of `-1` means the board ends in that direction.

use std::collections::BTreeMap;
use std::io::BufRead;

use crate::error::{ProtocolError, ProtocolResult};
use crate::game::{Board, Cell, CellIndex, DIRECTIONS, Opponent, Tree, TreeSize, Turn};

/// Integers read from one input line.
#[derive(Debug)]
struct Fields {
    line: usize,
    values: Vec<i64>,
}

impl Fields {
    fn int(&self, position: usize, field: &'static str) -> ProtocolResult<i64> {
        self.values
            .get(position)
            .copied()
            .ok_or(ProtocolError::MissingField {
                line: self.line,
                field,
            })
    }

    fn unsigned<T: TryFrom<i64>>(&self, position: usize, field: &'static str) -> ProtocolResult<T> {
        let value = self.int(position, field)?;
        T::try_from(value).map_err(|_| {
            if value < 0 {
                ProtocolError::NegativeValue {
                    line: self.line,
                    field,
                    value,
                }
            } else {
                ProtocolError::InvalidInteger {
                    line: self.line,
                    token: value.to_string(),
                }
            }
        })
    }

    fn flag(&self, position: usize, field: &'static str) -> ProtocolResult<bool> {
        Ok(self.int(position, field)? != 0)
    }
}

/// Line-oriented reader over any buffered input.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    /// Number of lines consumed so far.
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Read the startup block.
    ///
    /// Neighbour indices are taken as given; use
    /// [`check_board`](crate::game::check_board) to verify them.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, early end of input, malformed
    /// integers, or cells listed out of index order.
    pub fn read_board(&mut self) -> ProtocolResult<Board> {
        let number_of_cells: usize = self.expect_fields()?.unsigned(0, "numberOfCells")?;

        // Untrusted count: cap the up-front allocation.
        let mut cells = Vec::with_capacity(number_of_cells.min(64));
        for expected in 0..number_of_cells {
            let fields = self.expect_fields()?;
            let index = fields.int(0, "index")?;
            if usize::try_from(index).ok() != Some(expected) {
                return Err(ProtocolError::CellOutOfOrder {
                    line: fields.line,
                    expected,
                    found: index,
                });
            }
            let richness = fields.unsigned(1, "richness")?;

            let mut neighbours = [None; DIRECTIONS];
            for (direction, slot) in neighbours.iter_mut().enumerate() {
                let neighbour = fields.int(2 + direction, "neighbour")?;
                *slot = usize::try_from(neighbour).ok();
            }

            cells.push(Cell::new(expected, richness).with_neighbours(neighbours));
        }

        Ok(Board::from_ordered_cells(cells))
    }

    /// Read one turn block, discarding the possible-actions list.
    ///
    /// Returns `Ok(None)` when input ends cleanly before a new turn.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, a block cut short, malformed
    /// integers, trees on cells off the board or listed twice, or tree sizes
    /// outside 0..=3.
    pub fn read_turn(&mut self, board: &Board) -> ProtocolResult<Option<Turn>> {
        let Some(day_fields) = self.next_fields()? else {
            return Ok(None);
        };
        let day = day_fields.unsigned(0, "day")?;
        let nutrients = self.expect_fields()?.unsigned(0, "nutrients")?;

        let fields = self.expect_fields()?;
        let sun = fields.unsigned(0, "sun")?;
        let score = fields.unsigned(1, "score")?;

        let fields = self.expect_fields()?;
        let opponent = Opponent {
            sun: fields.unsigned(0, "oppSun")?,
            score: fields.unsigned(1, "oppScore")?,
            is_waiting: fields.flag(2, "oppIsWaiting")?,
        };

        let number_of_trees: usize = self.expect_fields()?.unsigned(0, "numberOfTrees")?;
        let mut trees = BTreeMap::new();
        for _ in 0..number_of_trees {
            let (line, tree) = self.read_tree(board)?;
            if trees.insert(tree.cell, tree).is_some() {
                return Err(ProtocolError::DuplicateTree {
                    line,
                    cell: tree.cell,
                });
            }
        }

        self.skip_possible_actions()?;

        Ok(Some(Turn {
            day,
            nutrients,
            sun,
            score,
            opponent,
            trees,
        }))
    }

    fn read_tree(&mut self, board: &Board) -> ProtocolResult<(usize, Tree)> {
        let fields = self.expect_fields()?;

        let cell: CellIndex = fields.unsigned(0, "cellIndex")?;
        if !board.contains(cell) {
            return Err(ProtocolError::UnknownCell {
                line: fields.line,
                cell: fields.int(0, "cellIndex")?,
            });
        }

        let raw_size = fields.int(1, "size")?;
        let size = TreeSize::from_wire(raw_size).ok_or(ProtocolError::InvalidTreeSize {
            line: fields.line,
            size: raw_size,
        })?;

        let tree = Tree {
            cell,
            size,
            is_mine: fields.flag(2, "isMine")?,
            is_dormant: fields.flag(3, "isDormant")?,
        };
        Ok((fields.line, tree))
    }

    fn skip_possible_actions(&mut self) -> ProtocolResult<()> {
        let count: usize = self.expect_fields()?.unsigned(0, "numberOfPossibleActions")?;
        for _ in 0..count {
            if !self.next_raw()? {
                return Err(ProtocolError::UnexpectedEof {
                    line: self.line + 1,
                });
            }
        }
        Ok(())
    }

    /// Read the next line into the buffer. `false` at end of input.
    fn next_raw(&mut self) -> ProtocolResult<bool> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        Ok(true)
    }

    fn next_fields(&mut self) -> ProtocolResult<Option<Fields>> {
        if !self.next_raw()? {
            return Ok(None);
        }
        let values = self
            .buffer
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|_| ProtocolError::InvalidInteger {
                    line: self.line,
                    token: token.to_string(),
                })
            })
            .collect::<ProtocolResult<Vec<_>>>()?;
        Ok(Some(Fields {
            line: self.line,
            values,
        }))
    }

    fn expect_fields(&mut self) -> ProtocolResult<Fields> {
        self.next_fields()?.ok_or(ProtocolError::UnexpectedEof {
            line: self.line + 1,
        })
    }
}
