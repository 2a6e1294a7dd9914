/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Result};

use crate::{apply_move, evaluate, Board, CastlingRights, Color, Move, Score, Square};

/// The legal-move capability the search depends on.
///
/// The rules engine owns move legality, including check detection; the search
/// never second-guesses what it is given. Returning an empty list is the one
/// and only signal that `player` has no legal reply, which the search scores
/// as a loss for them (it cannot tell checkmate from stalemate).
///
/// Implemented for any matching `Fn` closure, so tests can inject stubs.
pub trait MoveSource {
    /// All fully-legal moves for `player` in the given position.
    fn legal_moves(
        &self,
        player: Color,
        board: &Board,
        rights: &CastlingRights,
        en_passant: Option<Square>,
    ) -> Vec<Move>;
}

impl<F> MoveSource for F
where
    F: Fn(Color, &Board, &CastlingRights, Option<Square>) -> Vec<Move>,
{
    fn legal_moves(
        &self,
        player: Color,
        board: &Board,
        rights: &CastlingRights,
        en_passant: Option<Square>,
    ) -> Vec<Move> {
        self(player, board, rights, en_passant)
    }
}

/// A root move together with its search score, from the root mover's
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMove {
    pub mv: Move,
    pub score: Score,
}

/// The result of a search, containing the best move found, score, and total nodes searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Number of nodes searched.
    pub nodes: u64,

    /// Best move found during the search.
    pub bestmove: Option<Move>,

    /// Evaluation of the position after `bestmove` is made.
    pub score: Score,

    /// Every root move with its score, in descending order of strength.
    ///
    /// Intended for diagnostics or for a UI to display candidate strength;
    /// ties keep the move source's enumeration order.
    pub analysis: Vec<RootMove>,
}

impl Default for SearchResult {
    /// A default search result should initialize to a *very bad* value,
    /// since there isn't a move to play.
    #[inline(always)]
    fn default() -> Self {
        Self {
            nodes: 0,
            bestmove: None,
            score: -Score::INF,
            analysis: Vec::new(),
        }
    }
}

/// Executes a fixed-depth search over positions supplied by a [`MoveSource`].
///
/// A `Search` is cheap to construct and holds no game state of its own; every
/// board it examines is an ephemeral copy produced by
/// [`apply_move`](crate::apply_move). The caller owns the real game and is
/// responsible for running the search off any interactive thread and for
/// choosing a depth it can afford; there is no time-boxing here.
pub struct Search<'a, S> {
    /// Where legal moves come from.
    source: &'a S,

    /// Number of nodes visited so far.
    nodes: u64,
}

impl<'a, S: MoveSource> Search<'a, S> {
    /// Construct a new [`Search`] drawing moves from `source`.
    #[inline(always)]
    pub fn new(source: &'a S) -> Self {
        Self { source, nodes: 0 }
    }

    /// Select the best move for `player` in the given position.
    ///
    /// Every root move is searched `depth - 1` further plies with a full
    /// window, so `depth` must be at least 1; depth 0 would be a bare
    /// evaluation with no move to attach it to, and is a caller error.
    ///
    /// The best move is the first maximum in the source's enumeration order.
    /// If the source reports no legal moves at the root, there is no move to
    /// select and the result carries `bestmove: None` with the mate sentinel
    /// score.
    pub fn find_best_move(
        mut self,
        board: &Board,
        player: Color,
        depth: u8,
        rights: CastlingRights,
        en_passant: Option<Square>,
    ) -> Result<SearchResult> {
        if depth == 0 {
            bail!("cannot select a move at depth 0; request at least depth 1");
        }

        let moves = self.source.legal_moves(player, board, &rights, en_passant);
        if moves.is_empty() {
            return Ok(SearchResult {
                nodes: self.nodes,
                score: -Score::MATE,
                ..Default::default()
            });
        }

        let mut bestmove = None;
        let mut best_score = -Score::INF;
        let mut analysis = Vec::with_capacity(moves.len());

        for mv in moves {
            let sim = apply_move(board, mv, player, rights);

            // Search the reply one ply shallower with a full window, then
            // negate back into the root mover's perspective
            let score = -self.negamax(
                &sim.board,
                depth - 1,
                -Score::INF,
                Score::INF,
                player.opponent(),
                sim.rights,
                sim.en_passant,
            );

            if score > best_score {
                best_score = score;
                bestmove = Some(mv);
            }

            analysis.push(RootMove { mv, score });
        }

        // Stable sort: equally-scored moves keep their enumeration order
        analysis.sort_by(|a, b| b.score.cmp(&a.score));

        Ok(SearchResult {
            nodes: self.nodes,
            bestmove,
            score: best_score,
            analysis,
        })
    }

    /// Primary location of search logic.
    ///
    /// Uses the [negamax](https://www.chessprogramming.org/Negamax) algorithm:
    /// the returned score is always from the perspective of `player`, the
    /// side to move at this node, so callers negate it.
    fn negamax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: Score,
        beta: Score,
        player: Color,
        rights: CastlingRights,
        en_passant: Option<Square>,
    ) -> Score {
        self.nodes += 1;

        // If we've reached a terminal node, evaluate the position
        if depth == 0 {
            return evaluate(board) * player.negation_multiplier();
        }

        let moves = self.source.legal_moves(player, board, &rights, en_passant);

        // No legal reply is a loss for the player to move, whether or not
        // they are in check
        if moves.is_empty() {
            return -Score::MATE;
        }

        // Start with a *really bad* initial score
        let mut best = -Score::INF;

        for mv in moves {
            // Copy-make the new position
            let sim = apply_move(board, mv, player, rights);

            // Recurse with the window negated and swapped
            let score = -self.negamax(
                &sim.board,
                depth - 1,
                -beta,
                -alpha,
                player.opponent(),
                sim.rights,
                sim.en_passant,
            );

            best = best.max(score);
            alpha = alpha.max(score);

            // Beta cutoff: the opponent already has a better option earlier
            // in the tree, so siblings of this move cannot matter
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, PieceKind};

    fn no_moves(_: Color, _: &Board, _: &CastlingRights, _: Option<Square>) -> Vec<Move> {
        Vec::new()
    }

    fn lone_kings() -> Board {
        let mut board = Board::empty();
        board.place(Square::new(7, 4), Piece::new(Color::White, PieceKind::King));
        board.place(Square::new(0, 4), Piece::new(Color::Black, PieceKind::King));
        board
    }

    #[test]
    fn test_depth_zero_is_an_error() {
        let board = lone_kings();
        let res = Search::new(&no_moves).find_best_move(
            &board,
            Color::White,
            0,
            CastlingRights::ALL,
            None,
        );

        assert!(res.is_err());
    }

    #[test]
    fn test_no_root_moves_yields_mate_sentinel() {
        let board = lone_kings();
        let res = Search::new(&no_moves)
            .find_best_move(&board, Color::White, 3, CastlingRights::ALL, None)
            .unwrap();

        assert_eq!(res.bestmove, None);
        assert_eq!(res.score, -Score::MATE);
        assert!(res.analysis.is_empty());
    }

    #[test]
    fn test_opponent_without_reply_scores_as_mate() {
        // White always has one king shuffle; Black never has a reply. At
        // depth 2 the root move runs into the sentinel one ply down.
        let source = |player: Color, board: &Board, _: &CastlingRights, _: Option<Square>| {
            if player == Color::White {
                board
                    .pieces()
                    .filter(|(_, piece)| piece.color == Color::White)
                    .map(|(from, _)| Move::new(from, Square::new(from.row - 1, from.col)))
                    .collect()
            } else {
                Vec::new()
            }
        };

        let board = lone_kings();
        let res = Search::new(&source)
            .find_best_move(&board, Color::White, 2, CastlingRights::ALL, None)
            .unwrap();

        assert_eq!(res.score, Score::MATE);
        assert!(res.bestmove.is_some());
    }

    #[test]
    fn test_analysis_is_sorted_descending() {
        // Two rooks with one quiet step each; scores differ by destination
        let mut board = lone_kings();
        board.place(Square::new(4, 0), Piece::new(Color::Black, PieceKind::Rook));
        board.place(Square::new(5, 7), Piece::new(Color::Black, PieceKind::Rook));

        let source = |player: Color, board: &Board, _: &CastlingRights, _: Option<Square>| {
            if player == Color::Black {
                board
                    .pieces()
                    .filter(|(_, piece)| {
                        piece.color == Color::Black && piece.kind == PieceKind::Rook
                    })
                    .map(|(from, _)| Move::new(from, Square::new(from.row + 1, from.col)))
                    .collect()
            } else {
                Vec::new()
            }
        };

        let res = Search::new(&source)
            .find_best_move(&board, Color::Black, 1, CastlingRights::ALL, None)
            .unwrap();

        assert_eq!(res.analysis.len(), 2);
        assert!(res.analysis[0].score > res.analysis[1].score);
        assert_eq!(res.bestmove, Some(res.analysis[0].mv));
        assert_eq!(res.score, res.analysis[0].score);

        // The seventh-rank step outscores the quiet a-file shuffle
        assert_eq!(res.analysis[0].mv.from, Square::new(5, 7));
    }
}
