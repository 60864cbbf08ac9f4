#[cfg(test)]
pub mod vrf_coordinator;
