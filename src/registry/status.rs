//! Response status codes
//!
//! The `StatusCode` space. Independent of [`super::CommandCode`]: the two are
//! never compared, and each has its own `Unknown` sentinel.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{deserialize_code, serialize_code, CodeSpace, CodeSpaceKind};

/// Terminal and administrative signals carried in `StatusCode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i64)]
pub enum StatusCode {
    /// Sentinel for any unregistered code. Push notifications carry it too.
    #[default]
    Unknown = 0,

    /// Request accepted
    Success = 200,

    /// Job still in progress
    Running = 1003,

    /// Job stopped normally
    Stop = 1005,

    Failed = 1006,
}

impl StatusCode {
    /// Every registered status code, sentinel first
    pub const ALL: [StatusCode; 5] = [
        StatusCode::Unknown,
        StatusCode::Success,
        StatusCode::Running,
        StatusCode::Stop,
        StatusCode::Failed,
    ];

    /// Resolve a raw `StatusCode`; unregistered values map to `Unknown`
    pub fn from_i64(raw: i64) -> Self {
        match raw {
            200 => StatusCode::Success,
            1003 => StatusCode::Running,
            1005 => StatusCode::Stop,
            1006 => StatusCode::Failed,
            _ => StatusCode::Unknown,
        }
    }

    pub fn as_i64(self) -> i64 {
        self as i64
    }

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            StatusCode::Unknown => "Unknown",
            StatusCode::Success => "Success",
            StatusCode::Running => "Running",
            StatusCode::Stop => "Stop",
            StatusCode::Failed => "Failed",
        }
    }

    /// Whether the job this status reports on has ended
    pub fn is_terminal(self) -> bool {
        matches!(self, StatusCode::Stop | StatusCode::Failed)
    }
}

impl CodeSpace for StatusCode {
    const UNKNOWN: Self = StatusCode::Unknown;
    const SPACE: CodeSpaceKind = CodeSpaceKind::Status;

    fn resolve(raw: i64) -> Self {
        StatusCode::from_i64(raw)
    }

    fn as_i64(self) -> i64 {
        StatusCode::as_i64(self)
    }

    fn name(self) -> &'static str {
        StatusCode::name(self)
    }

    fn all() -> &'static [Self] {
        &StatusCode::ALL
    }
}

impl From<i64> for StatusCode {
    fn from(raw: i64) -> Self {
        StatusCode::from_i64(raw)
    }
}

impl From<StatusCode> for i64 {
    fn from(code: StatusCode) -> Self {
        code.as_i64()
    }
}

/// `{}` prints the name, `{:#}` adds the decimal code: `Failed (1006)`
impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} ({})", self.name(), self.as_i64())
        } else {
            f.write_str(self.name())
        }
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code(self, serializer)
    }
}

impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_code(deserializer)
    }
}
