



/// Simulator, loader and end-to-end scenarios.
pub mod sim;
