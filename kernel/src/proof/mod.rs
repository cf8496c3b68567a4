//! Proof module: content hashing and plan replay verification.
//!
//! Depends on `operators` and `model`.

pub mod hash;
pub mod replay;
