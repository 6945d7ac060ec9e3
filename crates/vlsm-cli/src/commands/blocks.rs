use anyhow::Result;
use vlsm_core::BLOCK_SIZES;

pub fn run(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&BLOCK_SIZES)?);
        return Ok(());
    }

    println!(
        "{:<6} {:<12} {:<12} {:<15}",
        "CIDR", "Total", "Usable", "Type"
    );
    println!("{}", "-".repeat(45));

    for block in &BLOCK_SIZES {
        println!(
            "/{:<5} {:<12} {:<12} {:<15}",
            block.prefix, block.total_hosts, block.usable_hosts, block.label
        );
    }

    Ok(())
}
