// Application layer - Use cases over injected cloud capabilities
pub mod cloud_repository;
pub mod correlator;
pub mod dashboard_service;
pub mod error;
pub mod service_collector;

#[cfg(test)]
pub mod test_support;
