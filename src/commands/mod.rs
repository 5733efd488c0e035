//! Command implementations for the roster and real-estate flows

pub mod estate;
pub mod roster;
