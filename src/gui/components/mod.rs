// src/gui/components/mod.rs
pub mod controls;
pub mod export_bar;
pub mod results;
