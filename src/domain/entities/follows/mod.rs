//! Follows Entity Module

pub mod follow;

pub use follow::Follow;
