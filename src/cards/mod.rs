//! Card catalogue.
//!
//! Love Letter has a fixed set of eight card types. `Card` carries rank
//! and deck quantity; everything that changes during play lives in the
//! round state.

pub mod card;

pub use card::Card;
