#![no_std]
//! # Shared Ballot Contracts Library
//!
//! Reusable types, errors, constants, and validation helpers for the ballot
//! workflow contracts.
//!
//! ## Modules
//!
//! - `errors` - Common error type used across both contracts
//! - `types` - Shared data types (WorkflowStatus, Voter, Proposal)
//! - `constants` - Validation limits and storage lifetimes
//! - `validation` - Reusable validation helper functions
//! - `registry` - Client interface for the whitelist registry contract

pub mod constants;
pub mod errors;
pub mod registry;
pub mod types;
pub mod validation;

pub use errors::ContractError;
pub use registry::{WhitelistClient, WhitelistInterface};
pub use types::{Proposal, Voter, WorkflowStatus};
pub use validation::validate_description;
