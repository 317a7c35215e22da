use crate::domain::ports::{Factory, ProductA, ProductB};

#[derive(Debug, Default)]
pub struct ProductA1;

impl ProductA for ProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct ProductB1;

impl ProductB for ProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn ProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with the ({})", result)
    }
}

/// Builds the first product family: A1 paired with B1.
#[derive(Debug, Default)]
pub struct Factory1;

impl Factory for Factory1 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        tracing::debug!("Creating product A1");
        Box::new(ProductA1)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        tracing::debug!("Creating product B1");
        Box::new(ProductB1)
    }
}
