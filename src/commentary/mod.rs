//! Presentation of match events.
//!
//! The controller emits [`MatchEvent`](crate::play::MatchEvent)s and never
//! prints. This module turns them into commentary text; a headless run simply
//! collects the events instead.

pub mod narrator;
pub mod text;

pub use narrator::Narrator;
pub use text::{render, TextCommentary};
