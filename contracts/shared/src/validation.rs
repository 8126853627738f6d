//! Validation helper utilities shared by the ballot contracts.

use soroban_sdk::String;

use crate::constants::MAX_DESCRIPTION_LEN;
use crate::errors::ContractError;

/// Validate a proposal description: non-empty and within the length limit.
pub fn validate_description(description: &String) -> Result<(), ContractError> {
    if description.len() == 0 || description.len() > MAX_DESCRIPTION_LEN {
        return Err(ContractError::ValidationError);
    }
    Ok(())
}
