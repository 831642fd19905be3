//! File-format boundaries: aerofoil coordinate input, `blockMeshDict`
//! output.

pub mod dat;
pub mod dict;
