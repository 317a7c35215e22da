// Concrete product families. New families plug in without touching existing
// code: implement the three ports and hand the factory to the client.

pub mod variant_one;
pub mod variant_two;

pub use variant_one::{Factory1, ProductA1, ProductB1};
pub use variant_two::{Factory2, ProductA2, ProductB2};
