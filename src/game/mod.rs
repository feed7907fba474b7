//! file: mod.rs
//! author: Jacob Xie
//! date: 2025/12/20 21:05:18 Saturday
//! brief:

mod board;
mod card;
mod deck;
mod flip;
mod status;
mod view;

pub use board::{MOVE_BUDGET, MatchGame};
pub use card::{Card, CardStatus, IDENTITIES, Identity};
pub use deck::Deck;
pub use flip::{Flip, FlipKind};
pub use status::{ConcealReason, Outcome, Phase};
pub use view::{DismissNotice, MatchGameView, QuitGame};
