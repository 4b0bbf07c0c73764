//! Dock panels: explore, trail detail, safety hub, console.

pub mod console;
pub mod detail;
pub mod explore;
pub mod safety;
