//! Question bank adapters.

pub mod fs_bank;
