// iconsmith - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: util, directories crate.

pub mod config;
