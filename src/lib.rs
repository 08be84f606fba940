// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod csv;
pub mod error;
pub mod extract;
pub mod file;
pub mod runner;
