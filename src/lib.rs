//! Tileblast (workspace facade crate).
//!
//! This package keeps the `tileblast::{core,engine,types}` public API stable
//! while the implementation lives in dedicated crates under `crates/`.

pub use tileblast_core as core;
pub use tileblast_engine as engine;
pub use tileblast_types as types;
