// DataViz Pro - app/mod.rs
//
// Application layer: the view/navigation state machine and the runtime state
// the UI reads and mutates.
// Dependencies: core layer; platform::config for the validated AppConfig
// that seeds AppState.
// Must NOT depend on: ui, or platform path/I-O code.

pub mod controller;
pub mod state;
