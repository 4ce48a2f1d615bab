//! Seastate library - ocean surface viewer with a live editor panel

pub mod camera;
pub mod cli;
pub mod color;
pub mod gui;
pub mod ocean;
pub mod panel;
pub mod params;
pub mod renderer;
pub mod rendering;
