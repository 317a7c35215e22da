use crate::core::Factory;
use crate::utils::error::Result;
use std::io::Write;

/// Runs the demonstration against any factory. The client only sees the
/// `Factory` port, so the same code serves every concrete family.
pub struct Client<F: Factory> {
    factory: F,
}

impl<F: Factory> Client<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Obtains a product pair from the factory and writes product B's two
    /// results to `out`, passing product A in as the collaborator.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::debug!("Requesting a product pair from the factory");
        let product_a = self.factory.create_product_a();
        let product_b = self.factory.create_product_b();

        tracing::debug!("Invoking product B functions");
        writeln!(out, "{}", product_b.useful_function_b())?;
        writeln!(
            out,
            "{}",
            product_b.another_useful_function_b(product_a.as_ref())
        )?;

        Ok(())
    }
}
