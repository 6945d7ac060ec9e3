use crate::error::VlsmError;
use serde::Serialize;

/// One row of the block size catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockSize {
    pub prefix: u8,
    pub total_hosts: u32,
    pub usable_hosts: u32,
    pub label: &'static str,
}

/// Standard block sizes from /32 down to /16, most specific first.
///
/// /31 and /32 count every address as usable (point-to-point and
/// host-route convention); everything else loses network + broadcast.
pub const BLOCK_SIZES: [BlockSize; 17] = [
    BlockSize { prefix: 32, total_hosts: 1, usable_hosts: 1, label: "Single Host" },
    BlockSize { prefix: 31, total_hosts: 2, usable_hosts: 2, label: "Point-to-Point" },
    BlockSize { prefix: 30, total_hosts: 4, usable_hosts: 2, label: "Tiny" },
    BlockSize { prefix: 29, total_hosts: 8, usable_hosts: 6, label: "Micro" },
    BlockSize { prefix: 28, total_hosts: 16, usable_hosts: 14, label: "Small" },
    BlockSize { prefix: 27, total_hosts: 32, usable_hosts: 30, label: "Small+" },
    BlockSize { prefix: 26, total_hosts: 64, usable_hosts: 62, label: "Medium" },
    BlockSize { prefix: 25, total_hosts: 128, usable_hosts: 126, label: "Medium+" },
    BlockSize { prefix: 24, total_hosts: 256, usable_hosts: 254, label: "Large" },
    BlockSize { prefix: 23, total_hosts: 512, usable_hosts: 510, label: "X-Large" },
    BlockSize { prefix: 22, total_hosts: 1024, usable_hosts: 1022, label: "XX-Large" },
    BlockSize { prefix: 21, total_hosts: 2048, usable_hosts: 2046, label: "XXX-Large" },
    BlockSize { prefix: 20, total_hosts: 4096, usable_hosts: 4094, label: "Jumbo" },
    BlockSize { prefix: 19, total_hosts: 8192, usable_hosts: 8190, label: "Jumbo+" },
    BlockSize { prefix: 18, total_hosts: 16384, usable_hosts: 16382, label: "Massive" },
    BlockSize { prefix: 17, total_hosts: 32768, usable_hosts: 32766, label: "Massive+" },
    BlockSize { prefix: 16, total_hosts: 65536, usable_hosts: 65534, label: "Giant" },
];

/// Find the smallest block whose usable host count satisfies a demand.
///
/// The catalog is scanned most-specific first, so ties resolve to the
/// smaller block. Demands beyond /16 (65534 usable) are out of scope.
pub fn find_smallest_block(required_hosts: u32) -> Result<&'static BlockSize, VlsmError> {
    BLOCK_SIZES
        .iter()
        .find(|block| block.usable_hosts >= required_hosts)
        .ok_or(VlsmError::Capacity(u64::from(required_hosts)))
}
