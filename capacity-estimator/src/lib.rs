//! Truck capacity estimation relay.
//!
//! Flow: [`TruckSpec`] validation → [`prompt::build_prompt`] → chat completion
//! → [`reply::parse_reply`] → opaque JSON estimate.

pub mod errors;
pub mod estimator;
pub mod prompt;
pub mod reply;
pub mod truck_spec;

pub use errors::{EstimatorError, EstimatorResult, ReplyError};
pub use estimator::estimate_capacity;
pub use truck_spec::{Dimensions, REQUIRED_FIELDS, SizeClass, TruckSpec};
