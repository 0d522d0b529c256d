// Adapters layer: concrete implementations of the domain ports (HTTP, views).

pub mod http;
pub mod memory;
pub mod terminal;
