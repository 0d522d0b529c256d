// Application layer: wires user commands to the controller.

pub mod commands;
pub mod session;
