use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use utoipa::ToSchema;
use vlsm_core::{Allocation, AllocationPlan, AddressRange, BlockSize, SubnetDetail};

/// Subnet calculation input; both fields arrive as raw text and are
/// validated before any arithmetic runs
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubnetRequest {
    /// Dotted-decimal IPv4 address (e.g. 192.168.1.0)
    pub address: String,

    /// CIDR prefix length (e.g. "24")
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubnetDetailResponse {
    #[schema(value_type = String)]
    pub address: Ipv4Addr,
    pub prefix: u8,
    #[schema(value_type = String)]
    pub subnet_mask: Ipv4Addr,
    #[schema(value_type = String)]
    pub wildcard_mask: Ipv4Addr,
    #[schema(value_type = String)]
    pub network_address: Ipv4Addr,
    #[schema(value_type = String)]
    pub broadcast_address: Ipv4Addr,
    #[schema(value_type = Option<String>)]
    pub first_usable: Option<Ipv4Addr>,
    #[schema(value_type = Option<String>)]
    pub last_usable: Option<Ipv4Addr>,
    pub host_bits: u8,
    pub total_hosts: u64,
    pub usable_hosts: u64,
}

impl From<SubnetDetail> for SubnetDetailResponse {
    fn from(detail: SubnetDetail) -> Self {
        Self {
            address: detail.address,
            prefix: detail.prefix,
            subnet_mask: detail.subnet_mask,
            wildcard_mask: detail.wildcard_mask,
            network_address: detail.network_address,
            broadcast_address: detail.broadcast_address,
            first_usable: detail.first_usable,
            last_usable: detail.last_usable,
            host_bits: detail.host_bits,
            total_hosts: detail.total_hosts,
            usable_hosts: detail.usable_hosts,
        }
    }
}

/// One named host-count requirement
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DepartmentDemand {
    pub name: String,
    pub required_hosts: u32,
}

/// Allocation planning input
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanRequest {
    /// Usable host capacity of the pool being partitioned
    pub pool_size: u64,

    /// Demands in display order; the response preserves it
    pub departments: Vec<DepartmentDemand>,
}

/// Range generation input: a plan plus a concrete base address
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RangeRequest {
    /// Dotted-decimal base address the first block starts at
    pub base_address: String,

    pub pool_size: u64,
    pub departments: Vec<DepartmentDemand>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AllocationResponse {
    pub name: String,
    pub required_hosts: u32,
    pub prefix: u8,
    pub allocated_usable: u32,
    pub label: String,
    pub wasted: u32,
    pub utilization_percent: f64,
}

impl From<&Allocation> for AllocationResponse {
    fn from(alloc: &Allocation) -> Self {
        Self {
            name: alloc.name.clone(),
            required_hosts: alloc.required_hosts,
            prefix: alloc.prefix,
            allocated_usable: alloc.allocated_usable,
            label: alloc.label.to_string(),
            wasted: alloc.wasted,
            utilization_percent: alloc.utilization_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlanResponse {
    pub allocations: Vec<AllocationResponse>,
    pub total_used: u64,
    pub total_wasted: u64,
    /// Negative when the demands exceed the pool
    pub reserve: i64,
    pub efficiency_percent: f64,
}

impl From<&AllocationPlan> for PlanResponse {
    fn from(plan: &AllocationPlan) -> Self {
        Self {
            allocations: plan.allocations.iter().map(Into::into).collect(),
            total_used: plan.total_used,
            total_wasted: plan.total_wasted,
            reserve: plan.reserve,
            efficiency_percent: plan.efficiency_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressRangeResponse {
    pub name: String,
    #[schema(value_type = String)]
    pub network_address: Ipv4Addr,
    pub prefix: u8,
    pub cidr: String,
    #[schema(value_type = String)]
    pub first_usable: Ipv4Addr,
    #[schema(value_type = String)]
    pub last_usable: Ipv4Addr,
    #[schema(value_type = String)]
    pub broadcast_address: Ipv4Addr,
    pub block_size: u64,
}

impl From<AddressRange> for AddressRangeResponse {
    fn from(range: AddressRange) -> Self {
        Self {
            name: range.name,
            network_address: range.network_address,
            prefix: range.prefix,
            cidr: range.cidr,
            first_usable: range.first_usable,
            last_usable: range.last_usable,
            broadcast_address: range.broadcast_address,
            block_size: range.block_size,
        }
    }
}

/// Plan plus the concrete ranges it maps to, index-aligned
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RangePlanResponse {
    pub plan: PlanResponse,
    pub ranges: Vec<AddressRangeResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlockSizeResponse {
    pub prefix: u8,
    pub total_hosts: u32,
    pub usable_hosts: u32,
    pub label: String,
}

impl From<&BlockSize> for BlockSizeResponse {
    fn from(block: &BlockSize) -> Self {
        Self {
            prefix: block.prefix,
            total_hosts: block.total_hosts,
            usable_hosts: block.usable_hosts,
            label: block.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
