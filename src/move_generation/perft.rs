use std::thread;

use crate::board::board::Board;
use crate::board::chess_types::*;
use crate::chess_errors::ChessError;
use crate::move_generation::legal_move_apply::resolve_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_filter::{all_legal_moves, has_legal_moves};
use crate::moves::move_record::Move;

/// Leaf statistics. A promoting pawn move counts once per promotion kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, to_move: Color, history: &[Move], depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut stack = history.to_vec();
    let mut total = PerftCounts::default();
    perft_recurse(board, to_move, &mut stack, depth, &mut total);
    total
}

/// One worker thread per root move.
pub fn perft_multi_threaded(
    board: &Board,
    to_move: Color,
    history: &[Move],
    depth: u8,
) -> Result<PerftCounts, ChessError> {
    if depth == 0 {
        return Ok(perft(board, to_move, history, depth));
    }

    let mut handles = Vec::new();
    for (next, record) in expand_moves(board, to_move, history) {
        let mut stack = history.to_vec();
        stack.push(record);

        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            if depth == 1 {
                count_leaf(&next, to_move.opposite(), &stack, &record, &mut local);
            } else {
                perft_recurse(&next, to_move.opposite(), &mut stack, depth - 1, &mut local);
            }
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| ChessError::InvalidBoard("perft worker thread panicked".to_owned()))?;
        total.merge(local);
    }
    Ok(total)
}

/// Every legal child position, with promotions expanded to each kind.
fn expand_moves(board: &Board, to_move: Color, history: &[Move]) -> Vec<(Board, Move)> {
    let mut children = Vec::new();
    for (from, to) in all_legal_moves(board, to_move, history) {
        let promotes = board
            .piece_at(from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn && to.row() == to_move.promotion_row());

        if promotes {
            for kind in ALL_PIECE_KINDS.into_iter().filter(|kind| kind.is_promotion_target()) {
                children.extend(resolve_move(board, from, to, kind));
            }
        } else {
            children.extend(resolve_move(board, from, to, PieceKind::Queen));
        }
    }
    children
}

fn perft_recurse(board: &Board, to_move: Color, stack: &mut Vec<Move>, depth: u8, counts: &mut PerftCounts) {
    for (next, record) in expand_moves(board, to_move, stack) {
        stack.push(record);

        if depth == 1 {
            count_leaf(&next, to_move.opposite(), stack, &record, counts);
        } else {
            perft_recurse(&next, to_move.opposite(), stack, depth - 1, counts);
        }

        stack.pop();
    }
}

fn count_leaf(board: &Board, defender: Color, stack: &[Move], record: &Move, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if record.is_capture() {
        counts.captures += 1;
    }
    if record.is_en_passant {
        counts.en_passant += 1;
    }
    if record.is_castling {
        counts.castles += 1;
    }
    if record.promotion_piece.is_some() {
        counts.promotions += 1;
    }
    if is_king_in_check(board, defender) {
        counts.checks += 1;
        if !has_legal_moves(board, defender, stack) {
            counts.checkmates += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded, PerftCounts};
    use crate::board::board::Board;
    use crate::board::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_counts() {
        let board = Board::standard();
        assert_eq!(perft(&board, Color::White, &[], 1).nodes, 20);
        assert_eq!(perft(&board, Color::White, &[], 2).nodes, 400);

        let depth3 = perft(&board, Color::White, &[], 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn kiwipete_counts_special_moves() {
        let position = parse_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .expect("kiwipete FEN should parse");

        let depth1 = perft(&position.board, position.active_player, position.prior_moves(), 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&position.board, position.active_player, position.prior_moves(), 2);
        assert_eq!(
            depth2,
            PerftCounts {
                nodes: 2039,
                captures: 351,
                en_passant: 1,
                castles: 91,
                promotions: 0,
                checks: 3,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn rook_endgame_counts_en_passant() {
        let position = parse_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").expect("FEN should parse");
        let depth3 = perft(&position.board, position.active_player, position.prior_moves(), 3);
        assert_eq!(depth3.nodes, 2812);
        assert_eq!(depth3.captures, 209);
        assert_eq!(depth3.en_passant, 2);
        assert_eq!(depth3.checks, 267);
    }

    #[test]
    fn promotions_expand_to_every_kind() {
        let position = parse_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
            .expect("FEN should parse");
        let history = position.prior_moves();

        assert_eq!(perft(&position.board, position.active_player, history, 1).nodes, 6);
        let depth2 = perft(&position.board, position.active_player, history, 2);
        assert_eq!(depth2.nodes, 264);
        assert_eq!(depth2.promotions, 48);
        assert_eq!(perft(&position.board, position.active_player, history, 3).nodes, 9467);
    }

    #[test]
    fn promotion_with_castling_rights_counts() {
        let position = parse_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8")
            .expect("FEN should parse");
        let history = position.prior_moves();

        assert_eq!(perft(&position.board, position.active_player, history, 1).nodes, 44);
        assert_eq!(perft(&position.board, position.active_player, history, 2).nodes, 1486);
    }

    #[test]
    fn threaded_perft_matches_single_thread_with_promotions() {
        let position = parse_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
            .expect("FEN should parse");
        let history = position.prior_moves();
        assert_eq!(
            perft_multi_threaded(&position.board, position.active_player, history, 2)
                .expect("workers should not panic"),
            perft(&position.board, position.active_player, history, 2)
        );
    }

    #[test]
    fn threaded_perft_matches_single_thread() {
        let board = Board::standard();
        assert_eq!(
            perft_multi_threaded(&board, Color::White, &[], 3).expect("workers should not panic"),
            perft(&board, Color::White, &[], 3)
        );
    }
}
