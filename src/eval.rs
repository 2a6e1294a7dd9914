/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{Board, PieceKind, Psqt, Score};

/// Returns a value of the provided `PieceKind`.
///
/// Values are obtained from here: <https://www.chessprogramming.org/Simplified_Evaluation_Function>
///
/// The King's value is large enough that no material swing can ever outweigh
/// it; it is not a mate detector.
#[inline(always)]
pub const fn value_of(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Evaluate the position from Black's perspective.
///
/// A positive/high number is good for Black, while a negative number is
/// better for White. A score of 0 is considered equal.
///
/// Each occupied square contributes its piece-square table entry (material
/// included), added for Black's pieces and subtracted for White's. The
/// search re-signs this into the side-to-move's perspective as needed.
pub fn evaluate(board: &Board) -> Score {
    let mut score = Score::DRAW;

    // Iterate over every occupied square
    for (square, piece) in board.pieces() {
        let value = Psqt::eval(piece, square);

        score += value * piece.color.negation_multiplier();
    }

    score
}
