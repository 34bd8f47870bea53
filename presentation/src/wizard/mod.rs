//! Interactive wizard.

pub mod flow;
