// Domain layer: the factory and product capabilities. No external dependencies.

pub mod ports;
