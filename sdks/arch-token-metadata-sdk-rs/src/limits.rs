//! Field limits enforced by the metadata program

use crate::instruction::{CreateMetadata, UpdateMetadata};

/// Maximum byte length of a token name
pub const NAME_MAX_LEN: usize = 256;

/// Maximum byte length of a token symbol
pub const SYMBOL_MAX_LEN: usize = 16;

/// Maximum byte length of an image URI
pub const IMAGE_MAX_LEN: usize = 512;

/// Maximum byte length of a description
pub const DESCRIPTION_MAX_LEN: usize = 512;

/// Maximum number of attribute pairs per mint
pub const MAX_ATTRIBUTES: usize = 32;

/// Maximum byte length of an attribute key
pub const MAX_KEY_LENGTH: usize = 64;

/// Maximum byte length of an attribute value
pub const MAX_VALUE_LENGTH: usize = 240;

fn check_len(field: &str, value: &str, max: usize) -> anyhow::Result<()> {
    anyhow::ensure!(
        value.len() <= max,
        "{} is {} bytes, limit is {}",
        field,
        value.len(),
        max
    );
    Ok(())
}

/// Rejects a `CreateMetadata` whose fields exceed the program's limits.
pub fn check_create_metadata(data: &CreateMetadata) -> anyhow::Result<()> {
    check_len("name", &data.name, NAME_MAX_LEN)?;
    check_len("symbol", &data.symbol, SYMBOL_MAX_LEN)?;
    check_len("image", &data.image, IMAGE_MAX_LEN)?;
    check_len("description", &data.description, DESCRIPTION_MAX_LEN)
}

/// Same limits as [`check_create_metadata`], applied to the fields being set.
pub fn check_update_metadata(data: &UpdateMetadata) -> anyhow::Result<()> {
    let fields = [
        ("name", &data.name, NAME_MAX_LEN),
        ("symbol", &data.symbol, SYMBOL_MAX_LEN),
        ("image", &data.image, IMAGE_MAX_LEN),
        ("description", &data.description, DESCRIPTION_MAX_LEN),
    ];
    for (field, value, max) in fields {
        if let Some(value) = value {
            check_len(field, value, max)?;
        }
    }
    Ok(())
}

/// Rejects attribute lists that are too long or carry oversized pairs.
pub fn check_attributes(pairs: &[(String, String)]) -> anyhow::Result<()> {
    anyhow::ensure!(
        pairs.len() <= MAX_ATTRIBUTES,
        "{} attributes, limit is {}",
        pairs.len(),
        MAX_ATTRIBUTES
    );
    for (key, value) in pairs {
        check_len("attribute key", key, MAX_KEY_LENGTH)?;
        check_len("attribute value", value, MAX_VALUE_LENGTH)?;
    }
    Ok(())
}
