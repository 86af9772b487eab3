// iconsmith - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and programmatic use from other build scripts.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
