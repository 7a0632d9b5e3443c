// DataViz Pro - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform.

pub mod landing;
pub mod motion;
pub mod panels;
pub mod shell;
pub mod theme;
pub mod widgets;
