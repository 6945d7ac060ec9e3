use thiserror::Error;

/// Errors produced by the subnet computation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VlsmError {
    /// Malformed dotted-decimal IPv4 text
    #[error("invalid IPv4 address: {0:?}")]
    Format(String),

    /// Prefix length outside [0, 32]
    #[error("prefix length /{0} out of range (must be 0-32)")]
    Range(u8),

    /// A single demand exceeds the largest catalog block (65534 usable hosts)
    #[error("requirement too large: {0} hosts (largest block is /16 with 65534 usable)")]
    Capacity(u64),

    /// Sequential layout ran past the end of the 32-bit address space
    #[error("allocation exceeds the 32-bit address space")]
    AddressSpaceExhausted,
}
