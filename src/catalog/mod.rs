pub mod catalog_client;
pub mod response_adapter;
