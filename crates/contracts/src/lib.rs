//! Shared model and state machines for the outdoor advertising catalog site.
//!
//! Everything in this crate is target-independent: the frontend crate feeds
//! it DOM measurements and URL strings and applies the decisions it returns.

pub mod catalog;
pub mod domain;
pub mod enums;
pub mod navigation;
pub mod shared;
