//! Arbor API - property-value resolution service
//!
//! Entry points consumed by the transport layer:
//! - [`PropertyValuesService::property_values`]: flat property fetch
//! - [`PropertyValuesService::linked_property_values`]: linked-property traversal
//! - [`PropertyValuesService::query`]: either of the above, driven by a
//!   property expression such as `<-containedInPlace+{typeOf:City}`

pub mod error;
mod linked;
mod resolve;
pub mod service;

#[cfg(test)]
mod testing;

pub use error::{ApiError, ApiResult};
pub use service::{PropertyValuesService, ServiceOptions};
