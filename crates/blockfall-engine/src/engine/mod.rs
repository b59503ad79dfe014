//! Game logic orchestrating the core data structures.
//!
//! - [`PlayField`] - board plus the active piece and its position
//! - [`Session`] - a full game: field, piece source, score, status
//! - [`GameStats`] - score and landing counters
//! - [`PieceSource`] - seeded uniform piece-kind generator
//!
//! A game advances by feeding [`Session::tick`] from a timer and the
//! `try_*`/`hard_drop` operations from player input; the session reports
//! [`SessionStatus::GameOver`] when a freshly spawned piece has nowhere to
//! stand, at which point the owner stops the timer and either discards the
//! session or replaces it with a fresh one.

pub use self::{piece_source::*, play_field::*, session::*, stats::*};

mod piece_source;
mod play_field;
mod session;
mod stats;
