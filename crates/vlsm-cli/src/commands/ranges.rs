use anyhow::{bail, Result};
use serde_json::json;
use vlsm_core::{generate_ranges, is_valid_address_text, parse_address, plan_allocation, Demand};

pub fn run(base: &str, pool: u64, departments: &[Demand], json_output: bool) -> Result<()> {
    if !is_valid_address_text(base) {
        bail!("invalid base address: {:?}", base);
    }

    let base_address = parse_address(base)?;
    let plan = plan_allocation(pool, departments)?;
    let ranges = generate_ranges(base_address, &plan.allocations)?;

    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "plan": plan,
                "ranges": ranges,
            }))?
        );
        return Ok(());
    }

    super::plan::print_plan(&plan);

    println!();
    println!(
        "{:<20} {:<20} {:<16} {:<16} {:<16} {:<8}",
        "Department", "Network", "First Usable", "Last Usable", "Broadcast", "Size"
    );
    println!("{}", "-".repeat(98));

    for range in &ranges {
        println!(
            "{:<20} {:<20} {:<16} {:<16} {:<16} {:<8}",
            range.name,
            range.cidr,
            range.first_usable,
            range.last_usable,
            range.broadcast_address,
            range.block_size
        );
    }

    Ok(())
}
