/// Chess domain types.
pub mod chess;
/// Turn orchestration.
pub mod game;
