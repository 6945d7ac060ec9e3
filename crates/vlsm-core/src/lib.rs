//! IPv4 subnet arithmetic and VLSM allocation library
//!
//! This library provides pure subnet computation without any I/O or
//! presentation dependencies: address/text conversion, subnet boundary
//! calculation, optimal block size selection and sequential range
//! layout. It can be used behind any CLI, API or UI frontend.

pub mod addr;
pub mod catalog;
pub mod detail;
pub mod error;
pub mod planner;
pub mod range;

pub use addr::{format_address, is_valid_address_text, is_valid_prefix_text, parse_address, prefix_to_mask};
pub use catalog::{find_smallest_block, BlockSize, BLOCK_SIZES};
pub use detail::{compute_subnet_detail, SubnetDetail};
pub use error::VlsmError;
pub use planner::{plan_allocation, Allocation, AllocationPlan, Demand};
pub use range::{generate_ranges, AddressRange};
