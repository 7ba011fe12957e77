pub mod href;
pub mod navigate;
pub mod resolve;
pub mod routes;
