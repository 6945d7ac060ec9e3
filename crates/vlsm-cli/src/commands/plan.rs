use anyhow::Result;
use vlsm_core::{plan_allocation, AllocationPlan, Demand};

pub fn run(pool: u64, departments: &[Demand], json: bool) -> Result<()> {
    let plan = plan_allocation(pool, departments)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    print_plan(&plan);
    Ok(())
}

pub fn print_plan(plan: &AllocationPlan) {
    println!(
        "{:<20} {:<10} {:<6} {:<11} {:<8} {:<13} {:<15}",
        "Department", "Required", "CIDR", "Allocated", "Wasted", "Utilization", "Type"
    );
    println!("{}", "-".repeat(86));

    for alloc in &plan.allocations {
        println!(
            "{:<20} {:<10} /{:<5} {:<11} {:<8} {:<13} {:<15}",
            alloc.name,
            alloc.required_hosts,
            alloc.prefix,
            alloc.allocated_usable,
            alloc.wasted,
            format!("{}%", alloc.utilization_percent),
            alloc.label
        );
    }

    println!();
    println!("Total Used:   {}", plan.total_used);
    println!("Total Wasted: {}", plan.total_wasted);
    println!("Reserve:      {}", plan.reserve);
    println!("Efficiency:   {}%", plan.efficiency_percent);
    if plan.reserve < 0 {
        println!("Warning: demands exceed the pool by {} hosts", -plan.reserve);
    }
}
