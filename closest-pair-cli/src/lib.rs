//! A library part of the command line interface: benchmark and correctness check logic
//! which can be used without argument parsing.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

pub mod extensions;
