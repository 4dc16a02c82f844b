// Adapters layer: concrete step implementations for the dependency ports.

pub mod steps;
