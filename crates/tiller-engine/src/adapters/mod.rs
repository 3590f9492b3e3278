//! Adapters
//!
//! Concrete implementations of the ports declared in `tiller`. Each
//! adapter owns the mapping between the port's entity types and its
//! backing technology; here that technology is process memory.

pub mod memory;
