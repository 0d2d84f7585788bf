/// Market service interface
pub mod market;
