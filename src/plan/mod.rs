//! Plan domain: draft record, step registry, validation schema, and the
//! serde mirrors of persisted tasks. No I/O and no terminal concerns.

pub mod draft;
pub mod steps;
pub mod task;
pub mod validation;

pub use draft::*;
pub use steps::*;
pub use task::*;
pub use validation::*;
