// iconsmith - app/mod.rs
//
// Application layer: wires configuration, rendering, and output together.
// Dependencies: core, util.

pub mod run;
