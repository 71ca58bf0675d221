pub mod scenarios;
pub mod simulator;
