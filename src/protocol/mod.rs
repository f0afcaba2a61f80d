//! Protocol Module
//!
//! Defines the JSON messages exchanged on the control channel.
//!
//! ## Message Shapes
//!
//! ### Command (client → server)
//! ```text
//! { "OpCode": 1537, "ProjectId": 12 }
//! ```
//!
//! ### Reply (server → client)
//! ```text
//! { "OpCode": 1537, "StatusCode": 1006, "Data": null, "ErrorMessage": "..." }
//! ```
//!
//! ### Notification (server → client)
//! ```text
//! { "OpCode": 1541, "StatusCode": 0, "Path": "Projects/12/Links",
//!   "Action": "Update", "Data": [ ... ] }
//! ```
//!
//! ### Monitor Updates
//! - 0x0603: MonitorAliveUpdate       - Data: alive devices or alive links
//! - 0x0604: MonitorStatusUpdate      - Data: system status devices
//! - 0x0605: MonitorTrafficUpdate     - Data: traffic links
//! - 0x0607: MonitorEndpointUpdate    - Data: management endpoint or null
//! - 0x0608: MonitorSwiftStatusUpdate - Data: swift devices

mod command;
mod response;
mod codec;
pub mod payload;

pub use command::CommandRequest;
pub use response::{
    devices_path, endpoint_path, links_path, AliveDevicesUpdate, AliveLinksUpdate,
    CommandResponse, EndpointUpdate, Notification, PatchUpdateAction, SwiftStatusUpdate,
    SystemStatusUpdate, TrafficUpdate,
};
pub use codec::JsonCodec;
