//! Runtime state of a session
//!
//! This module provides the two data structures a script manipulates:
//! - [`value`]: Runtime value representation (strings, numbers, lists,
//!   option/result encodings and the absent sentinel)
//! - [`environment`]: The flat variable environment of one session
//!
//! # Sharing
//!
//! Lists are reference counted, so binding a list to a variable and later
//! passing that variable to `vec_push` mutates the bound list in place. Values
//! are therefore not `Send`: a session lives on one thread. Independent
//! sessions each own their own [`environment::Environment`].

pub mod environment;
pub mod value;
