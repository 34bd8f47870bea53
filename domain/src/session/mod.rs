//! Wizard session state.

pub mod entities;
