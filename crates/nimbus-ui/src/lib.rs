//! Presentation layer for Nimbus
//!
//! The widget's display regions are modeled as a set of named write
//! sinks ([`render::RenderSurface`]) so the presenter can be tested
//! headless; [`terminal::TerminalSurface`] is the shipped implementation.

pub mod render;
pub mod terminal;

pub use render::{Presenter, RenderSurface};
pub use terminal::TerminalSurface;
