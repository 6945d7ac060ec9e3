use crate::catalog::find_smallest_block;
use crate::error::VlsmError;
use serde::{Deserialize, Serialize};

/// A named host-count requirement supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    pub name: String,
    pub required_hosts: u32,
}

/// One demand sized to its smallest sufficient block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allocation {
    pub name: String,
    pub required_hosts: u32,
    /// Prefix length of the chosen block
    pub prefix: u8,
    pub allocated_usable: u32,
    pub label: &'static str,
    pub wasted: u32,
    /// required / allocated, one decimal place
    pub utilization_percent: f64,
}

/// The result of sizing an ordered list of demands against a pool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationPlan {
    /// Same order as the input demand list
    pub allocations: Vec<Allocation>,
    pub total_used: u64,
    pub total_wasted: u64,
    /// pool_size - total_used; negative when the pool is over-allocated
    pub reserve: i64,
    /// (used - wasted) / used, one decimal place; 0 when nothing is used
    pub efficiency_percent: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Size each demand to its smallest sufficient block, in input order.
///
/// Greedy and order-preserving: each demand is sized independently,
/// with no reordering or packing across demands. The pool size is not
/// enforced; over-allocation shows up as a negative reserve. A demand
/// beyond the largest catalog block fails the whole call.
pub fn plan_allocation(pool_size: u64, demands: &[Demand]) -> Result<AllocationPlan, VlsmError> {
    let mut allocations = Vec::with_capacity(demands.len());
    let mut total_used = 0u64;
    let mut total_wasted = 0u64;

    for demand in demands {
        let block = find_smallest_block(demand.required_hosts)?;
        let wasted = block.usable_hosts - demand.required_hosts;

        allocations.push(Allocation {
            name: demand.name.clone(),
            required_hosts: demand.required_hosts,
            prefix: block.prefix,
            allocated_usable: block.usable_hosts,
            label: block.label,
            wasted,
            utilization_percent: round1(
                f64::from(demand.required_hosts) / f64::from(block.usable_hosts) * 100.0,
            ),
        });

        total_used += u64::from(block.usable_hosts);
        total_wasted += u64::from(wasted);
    }

    let efficiency_percent = if total_used > 0 {
        round1((total_used - total_wasted) as f64 / total_used as f64 * 100.0)
    } else {
        0.0
    };

    Ok(AllocationPlan {
        allocations,
        total_used,
        total_wasted,
        reserve: pool_size as i64 - total_used as i64,
        efficiency_percent,
    })
}
