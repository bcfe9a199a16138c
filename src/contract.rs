// Contract boundary
//
// The deployed contract is accepted as an opaque artifact: a fixed
// three-argument constructor interface plus a user-overridable bytecode
// blob. Nothing here validates ABI/bytecode compatibility beyond the length
// and prefix sanity floor; a mismatch surfaces from the encoding step as an
// invalid-argument failure.

use ethers::abi::{Abi, Token};
use ethers::types::{Bytes, U256};
use once_cell::sync::Lazy;

use crate::error::DeployError;
use crate::token::TokenParams;

/// Constructor interface of the token contract: `(name, symbol,
/// initialSupply)` in that order. The constructor scales the supply by
/// 10^18 internally.
pub const TOKEN_CONSTRUCTOR_ABI: &str = r#"[
  {
    "type": "constructor",
    "stateMutability": "nonpayable",
    "inputs": [
      { "name": "name_", "type": "string" },
      { "name": "symbol_", "type": "string" },
      { "name": "initialSupply_", "type": "uint256" }
    ]
  }
]"#;

/// Minimum length of a normalized (`0x`-prefixed) bytecode string. A weak
/// sanity floor, not full validation.
pub const MIN_BYTECODE_LEN: usize = 100;

static TOKEN_ABI: Lazy<Abi> =
    Lazy::new(|| serde_json::from_str(TOKEN_CONSTRUCTOR_ABI).expect("constructor ABI parses"));

/// Normalize a bytecode string: trim, prepend `0x` iff missing, and apply
/// the length floor.
pub fn normalize_bytecode(raw: &str) -> Result<String, DeployError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.starts_with("0x") {
        trimmed.to_string()
    } else {
        format!("0x{trimmed}")
    };
    if normalized.len() < MIN_BYTECODE_LEN {
        return Err(DeployError::InvalidBytecode);
    }
    Ok(normalized)
}

fn decode_bytecode(normalized: &str) -> Result<Vec<u8>, DeployError> {
    hex::decode(&normalized[2..]).map_err(|_| DeployError::InvalidBytecode)
}

/// Parse the decimal supply string into the value encoded into the
/// constructor call, unscaled.
pub fn parse_supply(supply: &str) -> Result<U256, DeployError> {
    U256::from_dec_str(supply.trim()).map_err(|err| DeployError::InvalidArgument(err.to_string()))
}

/// Build the contract-creation payload: bytecode followed by the ABI-encoded
/// constructor arguments.
pub fn deployment_init_code(bytecode: &str, params: &TokenParams) -> Result<Bytes, DeployError> {
    let normalized = normalize_bytecode(bytecode)?;
    let code = decode_bytecode(&normalized)?;
    let supply = parse_supply(&params.initial_supply)?;

    let constructor = TOKEN_ABI
        .constructor()
        .ok_or_else(|| DeployError::InvalidArgument("constructor is not defined in the ABI".to_string()))?;
    let tokens = [
        Token::String(params.name.clone()),
        Token::String(params.symbol.clone()),
        Token::Uint(supply),
    ];
    let init_code = constructor
        .encode_input(code, &tokens)
        .map_err(|err| DeployError::InvalidArgument(err.to_string()))?;

    Ok(Bytes::from(init_code))
}
