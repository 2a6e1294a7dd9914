/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{Board, CastlingRights, Color, Move, Piece, PieceKind, Square};

/// The position produced by applying one move: a fresh board, the mover's
/// updated castling rights, and the en-passant target (if any) for the next
/// ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulation {
    pub board: Board,
    pub rights: CastlingRights,
    pub en_passant: Option<Square>,
}

/// Apply `mv` for `mover` to `board`, producing the resulting position.
///
/// The inputs are untouched; the caller's board and rights remain the
/// authoritative game state. `mv` must come from the rules engine and be
/// fully legal. The only state this function tracks beyond piece placement is
/// castling availability and the en-passant target.
///
/// Castling rights are revoked when the owning player moves their king or a
/// rook off files a/h. Capturing an enemy rook on its home square does *not*
/// revoke the opponent's right; the rules engine inherited this behavior and
/// it is preserved here (see DESIGN.md).
pub fn apply_move(board: &Board, mv: Move, mover: Color, rights: CastlingRights) -> Simulation {
    let moved = board
        .get(mv.from)
        .expect("MoveSource produced a move from an empty square");
    let destination_was_empty = board.get(mv.to).is_none();

    let mut next = *board;
    let mut rights = rights;

    // Relocate, promoting en route if requested
    next.clear(mv.from);
    let placed = match mv.promotion {
        Some(kind) => Piece::new(mover, kind),
        None => moved,
    };
    next.place(mv.to, placed);

    // En passant: a pawn capturing diagonally onto an empty square takes the
    // pawn on the rank it came from, directly behind the destination
    if moved.kind == PieceKind::Pawn && mv.from.col != mv.to.col && destination_was_empty {
        next.clear(Square::new(mv.from.row, mv.to.col));
    }

    // Castling: a two-file king move also hops the rook from its home corner
    // to the square the king passed over
    if moved.kind == PieceKind::King && mv.from.col.abs_diff(mv.to.col) == 2 {
        let rook_home = if mv.to.col > mv.from.col { 7 } else { 0 };
        let passed = Square::new(mv.from.row, (mv.from.col + mv.to.col) / 2);

        next.clear(Square::new(mv.from.row, rook_home));
        next.place(passed, Piece::new(mover, PieceKind::Rook));
    }

    // Rights revocation, for the mover only
    if moved.kind == PieceKind::King {
        rights.revoke_all(mover);
    } else if moved.kind == PieceKind::Rook {
        if mv.from.col == 0 {
            rights.revoke_queenside(mover);
        } else if mv.from.col == 7 {
            rights.revoke_kingside(mover);
        }
    }

    // A double pawn push exposes the skipped square to en passant for exactly
    // one ply; anything else clears the target
    let en_passant = (moved.kind == PieceKind::Pawn && mv.from.row.abs_diff(mv.to.row) == 2)
        .then(|| Square::new((mv.from.row + mv.to.row) / 2, mv.from.col));

    Simulation {
        board: next,
        rights,
        en_passant,
    }
}
