// Application layer - Use cases and repository traits
pub mod grid_service;
pub mod sensor_repository;
