//! Encoders for the primitive field shapes
//!
//! Each `pack_*` appends exactly one field to `dst`; the matching `*_len`
//! function returns the number of bytes it appends, so a variant can size its
//! buffer once before writing.

use {crate::error::CodecError, solana_program_option::COption, solana_pubkey::Pubkey};

/// Width of a public key on the wire.
pub const PUBKEY_LEN: usize = 32;

/// Width of a string or list length prefix.
pub const LEN_PREFIX: usize = 4;

/// Append a `u8`.
pub fn pack_u8(value: u8, dst: &mut Vec<u8>) {
    dst.push(value);
}

/// Append a little-endian `u32`.
pub fn pack_u32(value: u32, dst: &mut Vec<u8>) {
    dst.extend_from_slice(&value.to_le_bytes());
}

/// Append a little-endian `u64`.
pub fn pack_u64(value: u64, dst: &mut Vec<u8>) {
    dst.extend_from_slice(&value.to_le_bytes());
}

/// Append a bool as 0 or 1.
pub fn pack_bool(value: bool, dst: &mut Vec<u8>) {
    dst.push(u8::from(value));
}

/// Append the raw 32 key bytes.
pub fn pack_pubkey(value: &Pubkey, dst: &mut Vec<u8>) {
    dst.extend_from_slice(value.as_ref());
}

/// Append `[0]` for `None`, `[1, key..]` for `Some`.
pub fn pack_coption_pubkey(value: &COption<Pubkey>, dst: &mut Vec<u8>) {
    match value {
        COption::None => dst.push(0),
        COption::Some(key) => {
            dst.push(1);
            pack_pubkey(key, dst);
        }
    }
}

/// Encoded size of an optional key.
pub fn coption_pubkey_len(value: &COption<Pubkey>) -> usize {
    match value {
        COption::None => 1,
        COption::Some(_) => 1 + PUBKEY_LEN,
    }
}

/// Append a `u32` byte length followed by the UTF-8 bytes.
pub fn pack_string(value: &str, dst: &mut Vec<u8>) {
    // instruction data never approaches u32::MAX bytes
    pack_u32(value.len() as u32, dst);
    dst.extend_from_slice(value.as_bytes());
}

/// Encoded size of a length-prefixed string.
pub fn string_len(value: &str) -> usize {
    LEN_PREFIX + value.len()
}

/// Append a presence byte followed by a length-prefixed string when present.
pub fn pack_option_string(value: Option<&str>, dst: &mut Vec<u8>) {
    match value {
        None => dst.push(0),
        Some(s) => {
            dst.push(1);
            pack_string(s, dst);
        }
    }
}

/// Encoded size of an optional string.
pub fn option_string_len(value: Option<&str>) -> usize {
    1 + value.map_or(0, string_len)
}

/// Append a `u32` count followed by each pair as two length-prefixed strings.
///
/// Order is preserved; duplicates are kept.
pub fn pack_string_pairs(pairs: &[(String, String)], dst: &mut Vec<u8>) {
    pack_u32(pairs.len() as u32, dst);
    for (key, value) in pairs {
        pack_string(key, dst);
        pack_string(value, dst);
    }
}

/// Encoded size of a string pair list.
pub fn string_pairs_len(pairs: &[(String, String)]) -> usize {
    LEN_PREFIX
        + pairs
            .iter()
            .map(|(k, v)| string_len(k) + string_len(v))
            .sum::<usize>()
}

/// Join byte chunks into one buffer allocated at its final size.
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let mut out = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Build a key from untyped bytes, rejecting anything but exactly 32 bytes.
pub fn pubkey_from_slice(bytes: &[u8]) -> Result<Pubkey, CodecError> {
    <[u8; PUBKEY_LEN]>::try_from(bytes)
        .map(Pubkey::new_from_array)
        .map_err(|_| CodecError::InvalidKeyLength(bytes.len()))
}
