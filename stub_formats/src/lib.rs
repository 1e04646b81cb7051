//! Byte-layout encoders for placeholder Quake-family assets.
#![forbid(unsafe_code)]

pub mod bsp;
pub mod lmp;
pub mod pak;
pub mod pattern;
pub mod progs;
pub mod wav;
