use crate::error::ApiError;

pub fn validate_capacity(value: u32) -> Result<u32, ApiError> {
    if value >= 1 {
        Ok(value)
    } else {
        Err(ApiError::bad_request(
            "classCapacity must be a positive integer",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_capacity() {
        assert!(validate_capacity(1).is_ok());
        assert!(validate_capacity(30).is_ok());
        assert!(validate_capacity(0).is_err());
    }
}
