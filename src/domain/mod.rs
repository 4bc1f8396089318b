//! Доменная модель: карты, колода, руки, стол, стороны.

pub mod card;
pub mod deck;
pub mod hand;
pub mod player;
pub mod table;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use table::*;
