//! Application layer: the facade itself.

pub mod facade;
