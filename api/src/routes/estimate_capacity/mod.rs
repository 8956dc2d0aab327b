pub mod estimate_capacity_route;
