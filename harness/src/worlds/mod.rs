//! Built-in planning worlds.
//!
//! Worlds provide domain data only: instance text or a ready [`Task`]. They
//! never search.
//!
//! [`Task`]: strider_kernel::model::Task

pub mod blocks;
pub mod two_blocks;
