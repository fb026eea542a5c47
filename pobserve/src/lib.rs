//! Production-friendly observability sinks for panel lifecycle events.
//!
//! ```rust
//! use pobserve::{FanoutEventSink, MetricsEventSink, SafeEventSink, TracingEventSink};
//!
//! let _sink = SafeEventSink::new(TracingEventSink);
//! let _metrics = MetricsEventSink;
//! let _fanout = FanoutEventSink::new(vec![]);
//! ```

mod fanout_sink;
mod metrics_sink;
mod safe_sink;
mod tracing_sink;

pub use fanout_sink::FanoutEventSink;
pub use metrics_sink::MetricsEventSink;
pub use safe_sink::SafeEventSink;
pub use tracing_sink::TracingEventSink;

pub mod prelude {
    pub use crate::{FanoutEventSink, MetricsEventSink, SafeEventSink, TracingEventSink};
}
