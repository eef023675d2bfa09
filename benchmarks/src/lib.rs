pub mod alternatives;
pub mod benchmarks;
pub mod helpers;
