//! Game session state machine and derived artifacts

mod session;
mod share;

pub use session::{GameSession, GameStatus, Row, SubmitError, SubmittedGuess};
pub use share::GAME_NAME;
