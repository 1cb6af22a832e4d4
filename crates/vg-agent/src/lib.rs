//! Vigil agent library — configuration, transport channels, report sink,
//! and the REST bridge.
//!
//! The binary (`main.rs`) wires these around `vg_diag::Pipeline`; the
//! modules are public so the bridge tests can build the same wiring.

pub mod channels;
pub mod config;
pub mod routes;
pub mod sink;
