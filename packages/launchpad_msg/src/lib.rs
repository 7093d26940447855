pub mod token_sale;
pub mod token_sale_factory;
