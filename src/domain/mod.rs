// Domain layer - Core value types and grid logic
pub mod crop;
pub mod grid;
pub mod sensor;
