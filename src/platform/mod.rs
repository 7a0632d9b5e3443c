// DataViz Pro - platform/mod.rs
//
// Platform abstraction layer: config directory resolution and config.toml.
// Dependencies: standard library, directories, serde, toml.
// Must NOT depend on: core, app, ui.

pub mod config;
