//! Core simulation pieces for the Tilt arcade sandbox: the recyclable
//! entity pool, the fixed-step frame clock, deterministic timers, input
//! state, and the stage (the host engine's motion contract, stood in for
//! headless runs).

pub mod clock;
pub mod input;
pub mod pool;
pub mod stage;
pub mod timer;
