//! Assorted types, for the moment limited to errors.

pub mod err;
