//! Protocol codec
//!
//! JSON encoding and decoding for control channel messages.
//!
//! ## Message Format
//!
//! Every message is one JSON object. The fields the codec looks at directly:
//!
//! ```text
//! {
//!   "OpCode": 1537,          // CommandCode, always present
//!   "StatusCode": 1006,      // StatusCode, replies only
//!   ...                      // command- or payload-specific fields
//! }
//! ```
//!
//! Delimiting messages on the transport is left to the caller; the codec only
//! sees complete messages.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Result, WireError};
use crate::registry::{CodeSpace, CommandCode, StatusCode};

/// Just the codes of a message; everything else is skipped
#[derive(Deserialize)]
struct Header {
    #[serde(rename = "OpCode")]
    op_code: Option<CommandCode>,
    #[serde(rename = "StatusCode")]
    status_code: Option<StatusCode>,
}

/// JSON codec bound to a size limit and output style
#[derive(Debug, Clone)]
pub struct JsonCodec {
    pretty: bool,
    max_message_size: usize,
}

impl JsonCodec {
    /// Create a codec from the given config
    pub fn new(config: &Config) -> Self {
        Self {
            pretty: config.pretty_json,
            max_message_size: config.max_message_size,
        }
    }

    pub fn max_message_size(&self) -> usize {
        self.max_message_size
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Encode a message to bytes
    pub fn encode<T: Serialize>(&self, message: &T) -> Result<Vec<u8>> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(message)?
        } else {
            serde_json::to_vec(message)?
        };

        self.check_size(bytes.len())?;
        tracing::trace!(len = bytes.len(), "Encoded message");
        Ok(bytes)
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    /// Decode a complete message
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        self.check_size(bytes.len())?;
        let message = serde_json::from_slice(bytes)?;
        tracing::trace!(len = bytes.len(), "Decoded message");
        Ok(message)
    }

    /// Resolve the `OpCode` of a message without decoding its payload
    ///
    /// An unregistered op code yields `CommandCode::Unknown`; deciding what
    /// to do with it is up to the caller. A message with no `OpCode` at all
    /// is a protocol error.
    pub fn peek_command(&self, bytes: &[u8]) -> Result<CommandCode> {
        let header = self.decode_header(bytes)?;
        let op_code = header
            .op_code
            .ok_or_else(|| WireError::Protocol("Message has no OpCode".to_string()))?;

        if op_code.is_unknown() {
            tracing::debug!("Message carries an unregistered OpCode");
        }
        Ok(op_code)
    }

    /// Resolve the `StatusCode` of a message (`Unknown` when absent or null)
    pub fn peek_status(&self, bytes: &[u8]) -> Result<StatusCode> {
        Ok(self.decode_header(bytes)?.status_code.unwrap_or_default())
    }

    fn decode_header(&self, bytes: &[u8]) -> Result<Header> {
        self.check_size(bytes.len())?;
        Ok(serde_json::from_slice(bytes)?)
    }

    // =========================================================================
    // Reader helpers
    // =========================================================================

    /// Read one complete message from a reader until EOF
    ///
    /// Stops reading one byte past the limit, so an oversized input is
    /// rejected without being buffered in full.
    pub fn read_message<R: Read>(&self, reader: R) -> Result<Vec<u8>> {
        let limit = (self.max_message_size as u64).saturating_add(1);
        let mut bytes = Vec::new();
        reader.take(limit).read_to_end(&mut bytes)?;

        self.check_size(bytes.len())?;
        Ok(bytes)
    }

    fn check_size(&self, size: usize) -> Result<()> {
        if size > self.max_message_size {
            return Err(WireError::MessageTooLarge {
                size,
                max: self.max_message_size,
            });
        }
        Ok(())
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
