//! Value types for the monitor core: samples, axis state, viewport.

pub mod sample;
pub mod scale;
pub mod viewport;
