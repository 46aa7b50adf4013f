//! Route handlers for the three services.

pub mod cats;
pub mod hello;
pub mod people;
