use crate::error::VlsmError;
use crate::planner::Allocation;
use serde::Serialize;
use std::net::Ipv4Addr;

/// A concrete address block laid out for one allocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRange {
    pub name: String,
    pub network_address: Ipv4Addr,
    pub prefix: u8,
    /// "a.b.c.d/p" display form
    pub cidr: String,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// Total addresses in the block, 2^(32 - prefix)
    pub block_size: u64,
}

/// Lay allocations out back-to-back starting at a base address.
///
/// Blocks are packed contiguously with no alignment correction: the
/// result is a valid partition, but blocks are only naturally-aligned
/// CIDR networks when the base address is aligned to the largest
/// block. Running past 255.255.255.255 fails with
/// `AddressSpaceExhausted` rather than wrapping.
pub fn generate_ranges(
    base_address: u32,
    allocations: &[Allocation],
) -> Result<Vec<AddressRange>, VlsmError> {
    let mut cursor = u64::from(base_address);
    let mut ranges = Vec::with_capacity(allocations.len());

    for alloc in allocations {
        let block_size = 1u64 << (32 - alloc.prefix);
        if cursor + block_size > 1u64 << 32 {
            return Err(VlsmError::AddressSpaceExhausted);
        }

        let network = cursor as u32;
        // /31 and /32 blocks have no room for the usual first/last
        // offsets; the wrapping forms keep the observed convention.
        ranges.push(AddressRange {
            name: alloc.name.clone(),
            network_address: Ipv4Addr::from(network),
            prefix: alloc.prefix,
            cidr: format!("{}/{}", Ipv4Addr::from(network), alloc.prefix),
            first_usable: Ipv4Addr::from(network.wrapping_add(1)),
            last_usable: Ipv4Addr::from((cursor + block_size).wrapping_sub(2) as u32),
            broadcast_address: Ipv4Addr::from((cursor + block_size - 1) as u32),
            block_size,
        });

        cursor += block_size;
    }

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::parse_address;
    use crate::planner::{plan_allocation, Demand};

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    fn plan(demands: &[(&str, u32)]) -> Vec<Allocation> {
        let demands: Vec<Demand> = demands
            .iter()
            .map(|(name, hosts)| Demand {
                name: name.to_string(),
                required_hosts: *hosts,
            })
            .collect();
        plan_allocation(1 << 16, &demands).unwrap().allocations
    }

    #[test]
    fn test_sequential_layout() {
        let allocations = plan(&[("HR", 50), ("Dev", 10)]);
        let ranges = generate_ranges(parse_address("10.0.0.0").unwrap(), &allocations).unwrap();

        assert_eq!(ranges.len(), 2);

        assert_eq!(ranges[0].name, "HR");
        assert_eq!(ranges[0].network_address, ip("10.0.0.0"));
        assert_eq!(ranges[0].prefix, 26);
        assert_eq!(ranges[0].cidr, "10.0.0.0/26");
        assert_eq!(ranges[0].first_usable, ip("10.0.0.1"));
        assert_eq!(ranges[0].last_usable, ip("10.0.0.62"));
        assert_eq!(ranges[0].broadcast_address, ip("10.0.0.63"));
        assert_eq!(ranges[0].block_size, 64);

        assert_eq!(ranges[1].name, "Dev");
        assert_eq!(ranges[1].network_address, ip("10.0.0.64"));
        assert_eq!(ranges[1].prefix, 28);
        assert_eq!(ranges[1].first_usable, ip("10.0.0.65"));
        assert_eq!(ranges[1].last_usable, ip("10.0.0.78"));
        assert_eq!(ranges[1].broadcast_address, ip("10.0.0.79"));
        assert_eq!(ranges[1].block_size, 16);
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let allocations = plan(&[("a", 500), ("b", 2), ("c", 100), ("d", 6), ("e", 1000)]);
        let ranges =
            generate_ranges(parse_address("172.16.0.0").unwrap(), &allocations).unwrap();

        for pair in ranges.windows(2) {
            let end = u64::from(u32::from(pair[0].network_address)) + pair[0].block_size;
            assert_eq!(u64::from(u32::from(pair[1].network_address)), end);
        }
    }

    #[test]
    fn test_unaligned_base_is_not_corrected() {
        // Back-to-back packing keeps the caller's base even when it is
        // not aligned to the block boundary
        let allocations = plan(&[("a", 50)]);
        let ranges = generate_ranges(parse_address("10.0.0.16").unwrap(), &allocations).unwrap();
        assert_eq!(ranges[0].network_address, ip("10.0.0.16"));
        assert_eq!(ranges[0].broadcast_address, ip("10.0.0.79"));
    }

    #[test]
    fn test_empty_allocation_list() {
        let ranges = generate_ranges(0, &[]).unwrap();
        assert!(ranges.is_empty());
    }

    #[test]
    fn test_exhaustion_past_address_space() {
        let allocations = plan(&[("a", 100), ("b", 100)]);
        // One /25 fits exactly at the top, the second runs off the end
        let base = parse_address("255.255.255.128").unwrap();
        assert_eq!(
            generate_ranges(base, &allocations).unwrap_err(),
            VlsmError::AddressSpaceExhausted
        );
    }

    #[test]
    fn test_last_block_ending_at_top_is_allowed() {
        let allocations = plan(&[("a", 100)]);
        let ranges =
            generate_ranges(parse_address("255.255.255.128").unwrap(), &allocations).unwrap();
        assert_eq!(ranges[0].broadcast_address, ip("255.255.255.255"));
    }

    #[test]
    fn test_index_alignment_with_allocations() {
        let allocations = plan(&[("x", 10), ("y", 20), ("z", 30)]);
        let ranges = generate_ranges(parse_address("10.1.0.0").unwrap(), &allocations).unwrap();
        for (alloc, range) in allocations.iter().zip(&ranges) {
            assert_eq!(alloc.name, range.name);
            assert_eq!(alloc.prefix, range.prefix);
        }
    }
}
