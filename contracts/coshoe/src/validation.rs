use crate::*;

pub(crate) fn validate_shoe_metadata(name: &str, image: &str) -> Result<(), RegistryError> {
    if name.len() > MAX_SHOE_NAME_LEN {
        return Err(RegistryError::InvalidInput(format!(
            "Shoe name exceeds max length of {} bytes",
            MAX_SHOE_NAME_LEN
        )));
    }
    if image.len() > MAX_IMAGE_URL_LEN {
        return Err(RegistryError::InvalidInput(format!(
            "Image URL exceeds max length of {} bytes",
            MAX_IMAGE_URL_LEN
        )));
    }
    Ok(())
}
