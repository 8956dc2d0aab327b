pub mod estimate_capacity;
pub mod health;
