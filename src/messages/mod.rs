//! Per-message-type decoders.
//!
//! Each AIS message type gets a sibling decoder built from the same
//! primitives: de-armor the payload, walk it with a field cursor, and
//! return an immutable record or the first error. Dispatch on the
//! leading 6-bit message id belongs to the caller, which has already
//! read it from the sentence; decoders only handle their own layout.

mod base_station_report;

pub use base_station_report::BaseStationReport;
