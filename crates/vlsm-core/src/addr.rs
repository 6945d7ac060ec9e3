use crate::error::VlsmError;

/// Parse a dotted-decimal IPv4 address into a 32-bit unsigned integer.
///
/// Only canonical text is accepted: exactly four dot-separated decimal
/// octets in [0, 255], no leading zeros, no whitespace, no signs.
pub fn parse_address(text: &str) -> Result<u32, VlsmError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(VlsmError::Format(text.to_string()));
    }

    let mut value = 0u32;
    for part in parts {
        let octet: u8 = part
            .parse()
            .map_err(|_| VlsmError::Format(text.to_string()))?;
        // Rejects non-canonical segments such as "01" or "+1"
        if octet.to_string() != *part {
            return Err(VlsmError::Format(text.to_string()));
        }
        value = (value << 8) | u32::from(octet);
    }

    Ok(value)
}

/// Format a 32-bit unsigned integer as a dotted-decimal IPv4 address.
///
/// Total over the full u32 domain; the inverse of [`parse_address`].
pub fn format_address(value: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (value >> 24) & 0xff,
        (value >> 16) & 0xff,
        (value >> 8) & 0xff,
        value & 0xff
    )
}

/// Compute the subnet mask for a CIDR prefix length.
///
/// Prefix 0 is an explicit special case: shifting a full-width value by
/// 32 is not defined for u32, so the all-zero mask is returned directly.
pub fn prefix_to_mask(prefix: u8) -> Result<u32, VlsmError> {
    if prefix > 32 {
        return Err(VlsmError::Range(prefix));
    }

    if prefix == 0 {
        Ok(0)
    } else {
        Ok(u32::MAX << (32 - prefix))
    }
}

/// Non-throwing validity check mirroring [`parse_address`]
pub fn is_valid_address_text(text: &str) -> bool {
    parse_address(text).is_ok()
}

/// Non-throwing validity check for prefix length text
pub fn is_valid_prefix_text(text: &str) -> bool {
    matches!(text.parse::<u8>(), Ok(p) if p <= 32)
}
