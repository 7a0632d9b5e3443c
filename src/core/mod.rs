// DataViz Pro - core/mod.rs
//
// Core domain layer: roles, panels, the role-to-menu registry, static
// showcase content and the collaborator seams.
// Dependencies: standard library and tracing only.
// Must NOT depend on: ui, platform, app.

pub mod collaborators;
pub mod fixtures;
pub mod model;
pub mod registry;
