//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! board storage so the search engine and the state machine share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, evaluate};
