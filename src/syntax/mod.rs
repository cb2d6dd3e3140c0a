//! This module contains the syntax checker for chemical equations.

pub mod checker;
pub mod error;
