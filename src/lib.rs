pub mod armor;
pub mod comm_state;
pub mod cursor;
pub mod error;
pub mod messages;
pub mod payload;
pub mod tracing_init;

pub use comm_state::{SlotAllocation, SotdmaState};
pub use cursor::FieldCursor;
pub use error::DecodeError;
pub use messages::BaseStationReport;
pub use payload::ArmoredPayload;
