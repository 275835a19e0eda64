#![forbid(unsafe_code)]

pub mod game;
pub mod model;

pub use game::{GameAction, Session, Status};
