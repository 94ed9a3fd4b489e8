// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod table;

pub mod back_to_back;
pub mod grouping;
pub mod query;
pub mod ratings;
pub mod records;
pub mod schedule;

pub mod file;
pub mod report;
pub mod store;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
