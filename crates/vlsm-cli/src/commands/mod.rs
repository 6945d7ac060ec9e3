pub mod blocks;
pub mod calc;
pub mod plan;
pub mod ranges;

use vlsm_core::Demand;

/// Parse a NAME:HOSTS demand argument.
///
/// The host count must be an explicit non-negative integer; anything
/// else is rejected rather than defaulted.
pub fn parse_demand(text: &str) -> Result<Demand, String> {
    let (name, hosts) = text
        .rsplit_once(':')
        .ok_or_else(|| format!("expected NAME:HOSTS, got {:?}", text))?;

    if name.is_empty() {
        return Err(format!("empty department name in {:?}", text));
    }

    let required_hosts: u32 = hosts
        .parse()
        .map_err(|_| format!("invalid host count {:?} in {:?}", hosts, text))?;

    Ok(Demand {
        name: name.to_string(),
        required_hosts,
    })
}
