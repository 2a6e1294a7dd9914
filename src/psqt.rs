/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{value_of, Color, Piece, PieceKind, Square};

/// Piece-Square tables from the [Simplified Evaluation Function](https://www.chessprogramming.org/Simplified_Evaluation_Function)
#[rustfmt::skip]
const PAWN: Psqt = Psqt::new(PieceKind::Pawn, [
      0,   0,   0,   0,   0,   0,   0,   0,
     50,  50,  50,  50,  50,  50,  50,  50,
     10,  10,  20,  30,  30,  20,  10,  10,
      5,   5,  10,  25,  25,  10,   5,   5,
      0,   0,   0,  20,  20,   0,   0,   0,
      5,  -5, -10,   0,   0, -10,  -5,   5,
      5,  10,  10, -20, -20,  10,  10,   5,
      0,   0,   0,   0,   0,   0,   0,   0,
]);

#[rustfmt::skip]
const KNIGHT: Psqt = Psqt::new(PieceKind::Knight, [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
]);

#[rustfmt::skip]
const BISHOP: Psqt = Psqt::new(PieceKind::Bishop, [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
]);

#[rustfmt::skip]
const ROOK: Psqt = Psqt::new(PieceKind::Rook, [
      0,   0,   0,   0,   0,   0,   0,   0,
      5,  10,  10,  10,  10,  10,  10,   5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
     -5,   0,   0,   0,   0,   0,   0,  -5,
      0,   0,   0,   5,   5,   0,   0,   0,
]);

#[rustfmt::skip]
const QUEEN: Psqt = Psqt::new(PieceKind::Queen, [
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,   5,   5,   5,   0, -10,
     -5,   0,   5,   5,   5,   5,   0,  -5,
      0,   0,   5,   5,   5,   5,   0,  -5,
    -10,   5,   5,   5,   5,   5,   0, -10,
    -10,   0,   5,   0,   0,   0,   0, -10,
    -20, -10, -10,  -5,  -5, -10, -10, -20,
]);

#[rustfmt::skip]
const KING: Psqt = Psqt::new(PieceKind::King, [
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -30, -40, -40, -50, -50, -40, -40, -30,
    -20, -30, -30, -40, -40, -30, -30, -20,
    -10, -20, -20, -20, -20, -20, -20, -10,
     20,  20,   0,   0,   0,   0,  20,  20,
     20,  30,  10,   0,   0,  10,  30,  20,
]);

/// A [Piece-Square Table](https://www.chessprogramming.org/Piece-Square_Tables) for use in evaluation.
///
/// Each entry includes the material value of the piece, so summing table
/// entries over the board yields material and positional score in one pass.
#[derive(Debug)]
pub struct Psqt([i32; Square::COUNT]);

impl Psqt {
    /// Fetch the Piece-Square Table value for `piece` at `square`.
    #[inline(always)]
    pub const fn eval(piece: Piece, square: Square) -> i32 {
        Self::table_for(piece.kind).get_relative(square, piece.color)
    }

    /// Fetch the Piece-Square Table for the provided [`PieceKind`].
    #[inline(always)]
    pub const fn table_for(kind: PieceKind) -> &'static Self {
        match kind {
            PieceKind::Pawn => &PAWN,
            PieceKind::Knight => &KNIGHT,
            PieceKind::Bishop => &BISHOP,
            PieceKind::Rook => &ROOK,
            PieceKind::Queen => &QUEEN,
            PieceKind::King => &KING,
        }
    }

    /// Creates a new [`Psqt`] for the provided [`PieceKind`] and array of values.
    ///
    /// Tables are written above in the conventional orientation, with White's
    /// home rank as the bottom row. Boards here put Black's back rank at row
    /// 0, so the rank is flipped at construction to let Black index rows
    /// directly; White reads through [`Square::mirrored`].
    const fn new(kind: PieceKind, psqt: [i32; Square::COUNT]) -> Self {
        let mut flipped = psqt;

        let mut i = 0;
        while i < psqt.len() {
            // Flip the rank, not the file, and add in the value of this piece
            flipped[i] = psqt[i ^ 56] + value_of(kind);
            i += 1;
        }

        Self(flipped)
    }

    /// Get the value of this PSQT at the provided square, from Black's
    /// orientation.
    #[inline(always)]
    pub const fn get(&self, square: Square) -> i32 {
        self.0[square.index()]
    }

    /// Get the value of this PSQT at the provided square, relative to `color`.
    #[inline(always)]
    pub const fn get_relative(&self, square: Square, color: Color) -> i32 {
        match color {
            Color::White => self.get(square.mirrored()),
            Color::Black => self.get(square),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_is_correct_for_colors() {
        // Over every possible square
        for square in Square::iter() {
            // For every piece
            for kind in PieceKind::all() {
                // Assert that White's PSQT eval is equal to Black's equivalent PSQT eval
                let white = Psqt::eval(Piece::new(Color::White, kind), square);
                let black = Psqt::eval(Piece::new(Color::Black, kind), square.mirrored());

                assert_eq!(
                    white,
                    black,
                    "{} on {square}: {white} (white) != {black} (black)",
                    kind.name()
                );
            }
        }
    }

    #[test]
    fn test_tables_include_material() {
        // Corner pawn entries are 0 positionally, so the table value there is
        // exactly the material value.
        let a8 = Square::new(0, 0);
        assert_eq!(
            Psqt::eval(Piece::new(Color::Black, PieceKind::Pawn), a8),
            value_of(PieceKind::Pawn)
        );

        // Central knights gain their +20 bonus on top of material.
        let d4 = Square::new(4, 3);
        assert_eq!(
            Psqt::eval(Piece::new(Color::White, PieceKind::Knight), d4),
            value_of(PieceKind::Knight) + 20
        );
    }
}
