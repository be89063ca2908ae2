//! Game variants implementing `MatchRules`.

pub mod love_letter;
pub mod psr;
