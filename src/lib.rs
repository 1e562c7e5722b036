//! Bricklint - compliance inspection for brick-architecture code units
//!
//! A "brick" is a small, single-purpose source unit with a metadata
//! sidecar declaring its interface, dependencies, and tests. Bricklint
//! loads a brick, runs four independent scanners over it (security,
//! contract, quality, dependencies), and folds their deductions into a
//! single 0..100 compliance score with a rating band.

pub mod cli;
pub mod loader;
pub mod metadata;
pub mod models;
pub mod scanners;
pub mod validator;
