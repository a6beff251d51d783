//! A collection of reusable algorithms without dependencies on solver logic.

pub mod geometry;
pub mod sorting;
