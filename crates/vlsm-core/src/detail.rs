use crate::addr::prefix_to_mask;
use crate::error::VlsmError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything derivable from an (address, prefix) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetDetail {
    /// The address the detail was computed from
    pub address: Ipv4Addr,
    /// CIDR prefix length
    pub prefix: u8,
    pub subnet_mask: Ipv4Addr,
    /// Bitwise complement of the subnet mask
    pub wildcard_mask: Ipv4Addr,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    /// None when the block has no usable hosts (/31 and /32)
    pub first_usable: Option<Ipv4Addr>,
    pub last_usable: Option<Ipv4Addr>,
    pub host_bits: u8,
    /// 2^(32 - prefix); u64 because /0 spans the whole address space
    pub total_hosts: u64,
    /// total_hosts - 2, floored at 0
    pub usable_hosts: u64,
}

/// Compute network boundaries and host counts for an address and prefix.
pub fn compute_subnet_detail(address: u32, prefix: u8) -> Result<SubnetDetail, VlsmError> {
    let mask = prefix_to_mask(prefix)?;
    let network = address & mask;
    let broadcast = network | !mask;

    let host_bits = 32 - prefix;
    let total_hosts = 1u64 << host_bits;
    let usable_hosts = if total_hosts > 2 { total_hosts - 2 } else { 0 };

    // When usable_hosts > 0 the block spans at least 4 addresses, so
    // network + 1 and broadcast - 1 stay inside [network, broadcast].
    let first_usable = (usable_hosts > 0).then(|| Ipv4Addr::from(network + 1));
    let last_usable = (usable_hosts > 0).then(|| Ipv4Addr::from(broadcast - 1));

    Ok(SubnetDetail {
        address: Ipv4Addr::from(address),
        prefix,
        subnet_mask: Ipv4Addr::from(mask),
        wildcard_mask: Ipv4Addr::from(!mask),
        network_address: Ipv4Addr::from(network),
        broadcast_address: Ipv4Addr::from(broadcast),
        first_usable,
        last_usable,
        host_bits,
        total_hosts,
        usable_hosts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::parse_address;

    fn ip(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    #[test]
    fn test_class_c_network() {
        let detail = compute_subnet_detail(parse_address("192.168.1.0").unwrap(), 24).unwrap();
        assert_eq!(detail.network_address, ip("192.168.1.0"));
        assert_eq!(detail.broadcast_address, ip("192.168.1.255"));
        assert_eq!(detail.subnet_mask, ip("255.255.255.0"));
        assert_eq!(detail.wildcard_mask, ip("0.0.0.255"));
        assert_eq!(detail.first_usable, Some(ip("192.168.1.1")));
        assert_eq!(detail.last_usable, Some(ip("192.168.1.254")));
        assert_eq!(detail.total_hosts, 256);
        assert_eq!(detail.usable_hosts, 254);
        assert_eq!(detail.host_bits, 8);
    }

    #[test]
    fn test_host_address_inside_subnet() {
        // The network bits are masked off whatever host is given
        let detail = compute_subnet_detail(parse_address("10.1.2.200").unwrap(), 26).unwrap();
        assert_eq!(detail.network_address, ip("10.1.2.192"));
        assert_eq!(detail.broadcast_address, ip("10.1.2.255"));
        assert_eq!(detail.usable_hosts, 62);
    }

    #[test]
    fn test_prefix_31_has_no_usable_hosts() {
        let detail = compute_subnet_detail(parse_address("10.0.0.0").unwrap(), 31).unwrap();
        assert_eq!(detail.total_hosts, 2);
        assert_eq!(detail.usable_hosts, 0);
        assert_eq!(detail.first_usable, None);
        assert_eq!(detail.last_usable, None);
    }

    #[test]
    fn test_prefix_32_single_host() {
        let detail = compute_subnet_detail(parse_address("255.255.255.255").unwrap(), 32).unwrap();
        assert_eq!(detail.network_address, ip("255.255.255.255"));
        assert_eq!(detail.broadcast_address, ip("255.255.255.255"));
        assert_eq!(detail.total_hosts, 1);
        assert_eq!(detail.usable_hosts, 0);
        assert_eq!(detail.first_usable, None);
    }

    #[test]
    fn test_prefix_0_whole_address_space() {
        let detail = compute_subnet_detail(parse_address("10.20.30.40").unwrap(), 0).unwrap();
        assert_eq!(detail.network_address, ip("0.0.0.0"));
        assert_eq!(detail.broadcast_address, ip("255.255.255.255"));
        assert_eq!(detail.subnet_mask, ip("0.0.0.0"));
        assert_eq!(detail.wildcard_mask, ip("255.255.255.255"));
        assert_eq!(detail.total_hosts, 1u64 << 32);
        assert_eq!(detail.usable_hosts, (1u64 << 32) - 2);
    }

    #[test]
    fn test_invalid_prefix() {
        assert_eq!(
            compute_subnet_detail(0, 33).unwrap_err(),
            VlsmError::Range(33)
        );
    }

    #[test]
    fn test_serialized_field_names_are_stable() {
        // Consumers key on these names; treat them as a contract
        let detail = compute_subnet_detail(parse_address("192.168.1.0").unwrap(), 24).unwrap();
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["network_address"], "192.168.1.0");
        assert_eq!(value["broadcast_address"], "192.168.1.255");
        assert_eq!(value["subnet_mask"], "255.255.255.0");
        assert_eq!(value["wildcard_mask"], "0.0.0.255");
        assert_eq!(value["first_usable"], "192.168.1.1");
        assert_eq!(value["usable_hosts"], 254);

        let none = compute_subnet_detail(parse_address("10.0.0.0").unwrap(), 31).unwrap();
        let value = serde_json::to_value(&none).unwrap();
        assert!(value["first_usable"].is_null());
    }

    #[test]
    fn test_block_span_matches_total_hosts() {
        for prefix in 1..=32u8 {
            let detail = compute_subnet_detail(parse_address("172.16.37.211").unwrap(), prefix).unwrap();
            let network = u32::from(detail.network_address) as u64;
            let broadcast = u32::from(detail.broadcast_address) as u64;
            assert_eq!(broadcast - network + 1, detail.total_hosts, "prefix /{}", prefix);
            assert_eq!(
                u32::from(detail.network_address) & u32::from(detail.subnet_mask),
                u32::from(detail.network_address)
            );
        }
    }
}
