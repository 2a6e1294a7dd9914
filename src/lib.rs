/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Board, piece, move, and castling-rights types shared by the whole crate.
mod board;

/// Evaluation of chess positions.
mod eval;

/// Static piece-square tables used during evaluation.
mod psqt;

/// Numerical score type and its constants.
mod score;

/// Main engine logic; all search related code.
mod search;

/// Pure application of a single move to a position.
mod simulate;

pub use board::*;
pub use eval::*;
pub use psqt::*;
pub use score::*;
pub use search::*;
pub use simulate::*;
