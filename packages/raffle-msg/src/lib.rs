pub mod raffle;
pub mod vrf_coordinator;
