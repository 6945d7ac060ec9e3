use anyhow::{bail, Result};
use vlsm_core::{compute_subnet_detail, is_valid_address_text, is_valid_prefix_text, parse_address};

pub fn run(ip: &str, prefix: &str, json: bool) -> Result<()> {
    if !is_valid_address_text(ip) {
        bail!("invalid IPv4 address: {:?}", ip);
    }
    if !is_valid_prefix_text(prefix) {
        bail!("invalid prefix length: {:?} (must be 0-32)", prefix);
    }

    let address = parse_address(ip)?;
    let prefix: u8 = prefix.parse()?;
    let detail = compute_subnet_detail(address, prefix)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    println!("IP Address:        {}", detail.address);
    println!("CIDR Notation:     /{}", detail.prefix);
    println!("Subnet Mask:       {}", detail.subnet_mask);
    println!("Wildcard Mask:     {}", detail.wildcard_mask);
    println!("Network Address:   {}", detail.network_address);
    println!("Broadcast Address: {}", detail.broadcast_address);
    match (detail.first_usable, detail.last_usable) {
        (Some(first), Some(last)) => {
            println!("First Usable Host: {}", first);
            println!("Last Usable Host:  {}", last);
        }
        _ => {
            println!("First Usable Host: N/A");
            println!("Last Usable Host:  N/A");
        }
    }
    println!("Host Bits:         {}", detail.host_bits);
    println!("Total Hosts:       {}", detail.total_hosts);
    println!("Usable Hosts:      {}", detail.usable_hosts);

    Ok(())
}
