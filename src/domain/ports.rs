/// First product family capability. Variants return a fixed string naming
/// themselves.
pub trait ProductA: Send + Sync {
    fn useful_function_a(&self) -> String;
}

/// Second product family capability. Besides its own fixed result, a product B
/// can collaborate with a product A.
pub trait ProductB: Send + Sync {
    fn useful_function_b(&self) -> String;

    /// Accepts any `ProductA`, not just the matching variant. Pairing a B with
    /// the A from the same family is caller discipline, not a type-level rule.
    fn another_useful_function_b(&self, collaborator: &dyn ProductA) -> String;
}

/// Creates one coherent family of products. Each call constructs a fresh
/// instance; there is no caching or pooling.
pub trait Factory: Send + Sync {
    fn create_product_a(&self) -> Box<dyn ProductA>;
    fn create_product_b(&self) -> Box<dyn ProductB>;
}
