//! Hand-written query modules.

pub mod cats;
