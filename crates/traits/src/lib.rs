//! Core hashing traits for the seedhash workspace.
//!
//! This crate provides the foundational trait that seedhash implementations
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod keyed_hash;

pub use keyed_hash::KeyedHash;
