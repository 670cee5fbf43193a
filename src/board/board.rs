//! Board model: an 8x8 mailbox plus per-kind bitboards kept in sync.
//!
//! `Board` is `Copy`, so simulating a candidate move is a stack copy rather
//! than a nested-array deep clone. The bitboards mirror the mailbox and feed
//! the attack tables; every mutation goes through `place` / `remove` so the
//! two views never diverge.

use serde::{Deserialize, Serialize};

use crate::board::chess_rules::BACK_RANK_ORDER;
use crate::board::chess_types::*;
use crate::chess_errors::ChessError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardLayout", into = "BoardLayout")]
pub struct Board {
    squares: [Option<Piece>; 64],
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
    occupancy_by_color: [u64; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
        }
    }

    /// Standard initial position: Black on rows 0-1, White on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_ORDER.iter().enumerate() {
            let col = col as u8;
            for color in ALL_COLORS {
                if let Some(square) = Square::new(color.back_row(), col) {
                    board.place(square, Piece::new(*kind, color));
                }
                if let Some(square) = Square::new(color.pawn_start_row(), col) {
                    board.place(square, Piece::new(PieceKind::Pawn, color));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Put `piece` on `square`, returning whatever stood there before.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let previous = self.remove(square);
        self.squares[square.index()] = Some(piece);
        self.pieces[piece.color.index()][piece.kind.index()] |= square.bit();
        self.occupancy_by_color[piece.color.index()] |= square.bit();
        previous
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let previous = self.squares[square.index()].take();
        if let Some(piece) = previous {
            self.pieces[piece.color.index()][piece.kind.index()] &= !square.bit();
            self.occupancy_by_color[piece.color.index()] &= !square.bit();
        }
        previous
    }

    /// New board with the piece on `from` relocated to `to` and the prior
    /// occupant of `to` gone. Pure relocation: no legality checks, no
    /// `has_moved` bookkeeping.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        if let Some(piece) = next.remove(from) {
            next.place(to, piece);
        }
        next
    }

    #[inline]
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Board {
        self.place(square, piece);
        self
    }

    #[inline]
    pub const fn pieces_of(&self, color: Color, kind: PieceKind) -> u64 {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub const fn occupancy(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub const fn occupancy_all(&self) -> u64 {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.occupancy_all() & square.bit() == 0
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        squares_in(self.pieces_of(color, PieceKind::King)).next()
    }

    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        squares_in(self.occupancy(color))
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> u32 {
        self.pieces_of(color, kind).count_ones()
    }
}

/// One occupied square in the serialized board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub square: Square,
    pub piece: Piece,
}

/// Serialized form of `Board`: the occupied squares in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub placements: Vec<Placement>,
}

impl From<Board> for BoardLayout {
    fn from(board: Board) -> Self {
        let placements = squares_in(board.occupancy_all())
            .filter_map(|square| board.piece_at(square).map(|piece| Placement { square, piece }))
            .collect();
        Self { placements }
    }
}

impl TryFrom<BoardLayout> for Board {
    type Error = ChessError;

    fn try_from(layout: BoardLayout) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for placement in layout.placements {
            if board.place(placement.square, placement.piece).is_some() {
                return Err(ChessError::InvalidBoard(format!(
                    "more than one piece on {}",
                    placement.square
                )));
            }
        }
        for color in ALL_COLORS {
            if board.count(color, PieceKind::King) > 1 {
                return Err(ChessError::InvalidBoard(format!("more than one {color} king")));
            }
        }
        Ok(board)
    }
}
