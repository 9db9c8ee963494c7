//! Errors from applying plays to a session.

use thiserror::Error;

use crate::core::{Card, Side};

/// A play the session refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the game is over")]
    GameOver,
    #[error("it is the {0}'s turn")]
    NotYourTurn(Side),
    #[error("card {0} is not in hand")]
    CardNotInHand(Card),
    #[error("the {0} has no cards")]
    EmptyHand(Side),
}
