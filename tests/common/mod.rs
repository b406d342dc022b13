#![allow(dead_code, unused_imports)]

pub use dag_traveler_test_utils::builders;
pub use dag_traveler_test_utils::recording_sink::RecordingSink;
pub use dag_traveler_test_utils::{init_tracing, with_timeout};
