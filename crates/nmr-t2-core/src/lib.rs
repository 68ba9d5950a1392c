//! Forward model for NMR T2 relaxation decay in spherical pores.
//!
//! Pore geometry and surface relaxivity give a T2 time per scenario; each
//! scenario's magnetization decay is sampled on a shared T2 grid and collected
//! into a table for export or charting.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
