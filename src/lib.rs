// DataViz Pro - lib.rs
//
// Library entry point, exposing all non-GUI modules for integration testing.
//
// The eframe `App` wrapper lives in `gui.rs` under the binary and is not
// part of the library surface.

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
