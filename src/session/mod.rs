//! Running a live game around the search engine.
//!
//! The session owns turn order, dealing, refills, history and the
//! outcome. It calls into `search` for the AI's card and applies it.
//!
//! ```
//! use ninety_nine::core::Side;
//! use ninety_nine::session::{GameSession, TableConfig};
//!
//! let mut session = GameSession::new(TableConfig::default().with_seed(1));
//! let card = session.hand(Side::Player).first().unwrap();
//! session.play(card).unwrap();
//! assert_eq!(session.turn(), Side::Ai);
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod game;
pub mod history;

pub use config::TableConfig;
pub use draw::{deal_hand, draw_cards, replenish};
pub use error::PlayError;
pub use game::{GameSession, Outcome, Turn};
pub use history::{History, PlayRecord};
