/// Order service interface
pub mod order;
