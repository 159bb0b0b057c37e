// Core data types for the Synchro Bus transit API

pub mod types;

pub use types::*;
