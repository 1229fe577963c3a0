//! Relayer set validation and signer recovery.
//!
//! Relayers are identified by secp256k1-derived, Ethereum-style 20-byte
//! addresses (lowercase 0x-hex), so the same relayer key attests on every
//! chain it watches. Recovery goes through the host's secp256k1 precompile.

use cosmwasm_std::Api;

use crate::error::ContractError;
use crate::hash::keccak256;
use crate::state::MAX_RELAYERS;

/// Parse a 0x-prefixed 20-byte hex address
fn parse_address(raw: &str) -> Option<[u8; 20]> {
    let hex_part = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X"))?;
    if hex_part.len() != 40 {
        return None;
    }
    let bytes = hex::decode(hex_part).ok()?;
    let mut out = [0u8; 20];
    out.copy_from_slice(&bytes);
    Some(out)
}

/// Validate a relayer list and threshold, returning the normalized
/// (lowercase 0x-hex) set. Shared by instantiate and `SetRelayers`.
pub fn validate_relayer_set(
    relayers: &[String],
    threshold: u32,
) -> Result<Vec<String>, ContractError> {
    if relayers.is_empty() {
        return Err(ContractError::NoRelayers);
    }
    if relayers.len() > MAX_RELAYERS {
        return Err(ContractError::TooManyRelayers);
    }

    let mut normalized: Vec<String> = Vec::with_capacity(relayers.len());
    for (index, raw) in relayers.iter().enumerate() {
        let address = parse_address(raw).ok_or(ContractError::InvalidRelayer { index })?;
        if address == [0u8; 20] {
            return Err(ContractError::ZeroRelayer { index });
        }
        let addr = format!("0x{}", hex::encode(address));
        if normalized.contains(&addr) {
            return Err(ContractError::DuplicateRelayers { index });
        }
        normalized.push(addr);
    }

    if threshold == 0 {
        return Err(ContractError::ZeroThreshold);
    }
    if threshold as usize > normalized.len() {
        return Err(ContractError::ThresholdTooHigh);
    }

    Ok(normalized)
}

/// Recover the signer address from a 65-byte r||s||v signature over `digest`.
///
/// Returns `None` for malformed signatures (wrong length, invalid recovery
/// parameter, recovery failure); such signatures recover no signer.
pub fn recover_signer(api: &dyn Api, digest: &[u8; 32], signature: &[u8]) -> Option<String> {
    if signature.len() != 65 {
        return None;
    }
    let v = signature[64];
    let recovery_param = if v >= 27 { v.wrapping_sub(27) } else { v };
    if recovery_param > 1 {
        return None;
    }

    let pubkey = api
        .secp256k1_recover_pubkey(digest, &signature[..64], recovery_param)
        .ok()?;

    // uncompressed SEC1 pubkey: 0x04 || X || Y; address is keccak(X || Y)[12..]
    let hash = keccak256(&pubkey[1..]);
    Some(format!("0x{}", hex::encode(&hash[12..])))
}
