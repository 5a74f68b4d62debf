//! Fixed configuration of the expander

pub mod consts;
