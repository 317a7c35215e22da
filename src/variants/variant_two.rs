use crate::domain::ports::{Factory, ProductA, ProductB};

#[derive(Debug, Default)]
pub struct ProductA2;

impl ProductA for ProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

#[derive(Debug, Default)]
pub struct ProductB2;

impl ProductB for ProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn ProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with the ({})", result)
    }
}

/// Builds the second product family: A2 paired with B2.
#[derive(Debug, Default)]
pub struct Factory2;

impl Factory for Factory2 {
    fn create_product_a(&self) -> Box<dyn ProductA> {
        tracing::debug!("Creating product A2");
        Box::new(ProductA2)
    }

    fn create_product_b(&self) -> Box<dyn ProductB> {
        tracing::debug!("Creating product B2");
        Box::new(ProductB2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::variant_one::ProductA1;

    #[test]
    fn products_identify_the_second_variant() {
        assert_eq!(
            ProductA2.useful_function_a(),
            "The result of the product A2."
        );
        assert_eq!(
            ProductB2.useful_function_b(),
            "The result of the product B2."
        );
    }

    #[test]
    fn collaboration_embeds_the_collaborator_result() {
        let result = ProductB2.another_useful_function_b(&ProductA2);
        assert_eq!(
            result,
            "The result of the B2 collaborating with the (The result of the product A2.)"
        );
    }

    #[test]
    fn mismatched_collaborator_is_accepted() {
        let result = ProductB2.another_useful_function_b(&ProductA1);
        assert_eq!(
            result,
            "The result of the B2 collaborating with the (The result of the product A1.)"
        );
    }

    #[test]
    fn repeated_calls_return_identical_results() {
        let a = ProductA2;
        assert_eq!(a.useful_function_a(), a.useful_function_a());

        let b = ProductB2;
        assert_eq!(b.useful_function_b(), b.useful_function_b());
        assert_eq!(
            b.another_useful_function_b(&a),
            b.another_useful_function_b(&a)
        );
    }
}
