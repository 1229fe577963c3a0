//! Typed-message digest construction for fulfill attestations.
//!
//! Relayers co-sign a domain-separated digest over the fulfill payload. The
//! domain binds {name, version, local chain id, verifying instance address},
//! so a signature is valid on exactly one instance on exactly one chain. The
//! digest also keys the replay-protection set.
//!
//! # Byte Layouts
//!
//! Domain separator input (128 bytes):
//! - Bytes 0-31:   keccak256(DOMAIN_NAME)
//! - Bytes 32-63:  keccak256(DOMAIN_VERSION)
//! - Bytes 64-95:  keccak256(local chain id)
//! - Bytes 96-127: keccak256(instance address)
//!
//! Struct hash input (160 bytes):
//! - Bytes 0-31:    amount (big-endian, left-padded)
//! - Bytes 32-63:   keccak256(fromUser)
//! - Bytes 64-95:   keccak256(toUser)
//! - Bytes 96-127:  keccak256(fromChain)
//! - Bytes 128-159: nonce (big-endian, left-padded)
//!
//! Final digest: keccak256(0x19 || 0x01 || domain separator || struct hash)

use tiny_keccak::{Hasher, Keccak};

use crate::msg::FulfillTx;

/// Signing domain name constant
pub const DOMAIN_NAME: &str = "BridgeAssist";

/// Signing domain version constant
pub const DOMAIN_VERSION: &str = "1.0";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the domain separator for one instance on one chain
pub fn domain_separator(chain_id: &str, instance: &str) -> [u8; 32] {
    let mut data = [0u8; 128];
    data[0..32].copy_from_slice(&keccak256(DOMAIN_NAME.as_bytes()));
    data[32..64].copy_from_slice(&keccak256(DOMAIN_VERSION.as_bytes()));
    data[64..96].copy_from_slice(&keccak256(chain_id.as_bytes()));
    data[96..128].copy_from_slice(&keccak256(instance.as_bytes()));
    keccak256(&data)
}

/// Hash the fulfill payload fields
pub fn struct_hash(tx: &FulfillTx) -> [u8; 32] {
    let mut data = [0u8; 160];

    // u128 amount left-padded to 32 bytes, big-endian
    data[16..32].copy_from_slice(&tx.amount.u128().to_be_bytes());

    data[32..64].copy_from_slice(&keccak256(tx.from_user.as_bytes()));
    data[64..96].copy_from_slice(&keccak256(tx.to_user.as_bytes()));
    data[96..128].copy_from_slice(&keccak256(tx.from_chain.as_bytes()));

    // u64 nonce left-padded to 32 bytes, big-endian
    data[152..160].copy_from_slice(&tx.nonce.to_be_bytes());

    keccak256(&data)
}

/// Compute the attestation digest relayers sign for one fulfill payload
pub fn fulfill_digest(chain_id: &str, instance: &str, tx: &FulfillTx) -> [u8; 32] {
    let mut data = [0u8; 66];
    data[0] = 0x19;
    data[1] = 0x01;
    data[2..34].copy_from_slice(&domain_separator(chain_id, instance));
    data[34..66].copy_from_slice(&struct_hash(tx));
    keccak256(&data)
}

/// Convert a 32-byte digest to a 0x-prefixed hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
