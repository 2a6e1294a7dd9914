/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// One of the two players of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite of this color.
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Multiplier for converting a Black-perspective evaluation into this
    /// color's perspective.
    ///
    /// [`crate::evaluate`] scores positions so that positive favors Black,
    /// so Black's multiplier is `1` and White's is `-1`.
    #[inline(always)]
    pub const fn negation_multiplier(&self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Returns this color's name, as a string.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

/// The kind of a chess piece, without regard for its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds, in ascending order of value.
    #[inline(always)]
    pub const fn all() -> [Self; 6] {
        [
            Self::Pawn,
            Self::Knight,
            Self::Bishop,
            Self::Rook,
            Self::Queen,
            Self::King,
        ]
    }

    /// Returns this kind's name, as a string.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

/// A chess piece: a kind and the color of its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Construct a new [`Piece`].
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { kind, color }
    }

    /// One-letter representation; uppercase for White, lowercase for Black.
    pub const fn char(&self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };

        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

/// A square on the board, addressed by row and column.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's (rank 1), so
/// White pawns advance toward lower rows and Black pawns toward higher rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Number of squares on a board.
    pub const COUNT: usize = 64;

    /// Construct a new [`Square`] from a row and column, both in `0..8`.
    #[inline(always)]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Index of this square into a flat 64-entry table.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// This square with its row mirrored about the board's horizontal center.
    #[inline(always)]
    pub const fn mirrored(&self) -> Self {
        Self {
            row: 7 - self.row,
            col: self.col,
        }
    }

    /// Iterator over all 64 squares, row by row.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Self::new(row, col)))
    }
}

impl fmt::Display for Square {
    /// Squares display in algebraic notation (`a1` through `h8`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

/// A move, as supplied by the rules engine.
///
/// The core treats moves as opaque and already legal: it never re-validates
/// the source square, destination, or promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Construct a new non-promoting [`Move`].
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Construct a new promoting [`Move`].
    #[inline(always)]
    pub const fn promoting(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    /// Moves display in UCI-like long algebraic notation (`e2e4`, `e7e8q`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            let suffix = match kind {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                _ => 'q',
            };
            write!(f, "{suffix}")?;
        }
        Ok(())
    }
}

/// Whether castling remains available for one player, per side of the board.
///
/// These flags are monotonic: once cleared, nothing in the core ever sets
/// them again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
}

/// Castling availability for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    white: SideRights,
    black: SideRights,
}

impl CastlingRights {
    /// Rights at the start of a game: everything available.
    pub const ALL: Self = Self {
        white: SideRights {
            kingside: true,
            queenside: true,
        },
        black: SideRights {
            kingside: true,
            queenside: true,
        },
    };

    /// Fetch the rights of the provided player.
    #[inline(always)]
    pub const fn of(&self, color: Color) -> SideRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Clear both rights of the provided player.
    #[inline(always)]
    pub fn revoke_all(&mut self, color: Color) {
        *self.side_mut(color) = SideRights {
            kingside: false,
            queenside: false,
        };
    }

    /// Clear the kingside right of the provided player.
    #[inline(always)]
    pub fn revoke_kingside(&mut self, color: Color) {
        self.side_mut(color).kingside = false;
    }

    /// Clear the queenside right of the provided player.
    #[inline(always)]
    pub fn revoke_queenside(&mut self, color: Color) {
        self.side_mut(color).queenside = false;
    }

    #[inline(always)]
    fn side_mut(&mut self, color: Color) -> &mut SideRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
}

impl Default for CastlingRights {
    #[inline(always)]
    fn default() -> Self {
        Self::ALL
    }
}

/// An 8x8 chess board.
///
/// Boards are small `Copy` values; the search copies them freely and never
/// mutates one it was handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self([[None; 8]; 8])
    }

    /// Fetch the piece at the provided square, if one exists.
    #[inline(always)]
    pub const fn get(&self, square: Square) -> Option<Piece> {
        self.0[square.row as usize][square.col as usize]
    }

    /// Place a piece on the provided square, replacing whatever was there.
    #[inline(always)]
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.0[square.row as usize][square.col as usize] = Some(piece);
    }

    /// Remove the piece at the provided square, if one exists.
    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.0[square.row as usize][square.col as usize] = None;
    }

    /// Iterator over every occupied square and the piece on it.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }
}

impl fmt::Display for Board {
    /// Prints the board as a grid from White's point of view, with rank and
    /// file labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let c = self
                    .get(Square::new(row, col))
                    .map(|p| p.char())
                    .unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  +----------------")?;
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
        assert_eq!(Square::new(7, 4).to_string(), "e1");
        assert_eq!(Square::new(0, 3).to_string(), "d8");
    }

    #[test]
    fn test_move_display() {
        let quiet = Move::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(quiet.to_string(), "e2e4");

        let promo = Move::promoting(Square::new(1, 0), Square::new(0, 0), PieceKind::Queen);
        assert_eq!(promo.to_string(), "a7a8q");
    }

    #[test]
    fn test_board_place_and_clear() {
        let mut board = Board::empty();
        let e4 = Square::new(4, 4);

        board.place(e4, Piece::new(Color::White, PieceKind::Knight));
        assert_eq!(
            board.get(e4),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(board.pieces().count(), 1);

        board.clear(e4);
        assert_eq!(board.get(e4), None);
        assert_eq!(board, Board::empty());
    }
}
