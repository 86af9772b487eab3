// iconsmith - core/mod.rs
//
// Core logic layer: the icon plan, rasterisation, and output writing.
// Must NOT depend on: platform, app.

pub mod generate;
pub mod manifest;
pub mod plan;
pub mod render;
