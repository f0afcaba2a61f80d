//! Code Registry
//!
//! Maps raw integers from the wire to symbolic codes and back, for two
//! independent code spaces:
//!
//! - [`CommandCode`]: operation requests and monitor events (`OpCode`)
//! - [`StatusCode`]: response status signals (`StatusCode`)
//!
//! ## Resolution Policy
//!
//! Resolution is total. Any `i64` that is not registered in a space resolves
//! to that space's `Unknown` sentinel (numeric 0), so a receiver keeps working
//! when a newer peer sends codes it does not know yet. Callers that treat an
//! unknown code as a protocol violation check [`CodeSpace::is_unknown`].
//!
//! Both tables are compile-time constants; every lookup is a `match` with no
//! locking and no allocation.

mod command;
mod status;

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use crate::error::{Result, WireError};

pub use command::CommandCode;
pub use status::StatusCode;

// =============================================================================
// Code Space Trait
// =============================================================================

/// Behaviour shared by both code spaces
pub trait CodeSpace: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// The sentinel returned for unregistered codes
    const UNKNOWN: Self;

    /// Which space this type belongs to
    const SPACE: CodeSpaceKind;

    /// Resolve a raw wire value, falling back to [`Self::UNKNOWN`]
    fn resolve(raw: i64) -> Self;

    /// The stable numeric code
    fn as_i64(self) -> i64;

    /// The canonical display name
    fn name(self) -> &'static str;

    /// Every registered value, sentinel first
    fn all() -> &'static [Self];

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// Reverse lookup by canonical name (case-sensitive)
    ///
    /// Names are not wire data, so a miss is `None` rather than the sentinel.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|code| code.name() == name)
    }
}

// =============================================================================
// Dynamic Form
// =============================================================================

/// Selects one of the two code spaces at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodeSpaceKind {
    Command,
    Status,
}

impl CodeSpaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CodeSpaceKind::Command => "command",
            CodeSpaceKind::Status => "status",
        }
    }
}

impl fmt::Display for CodeSpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A symbolic code from either space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Command(CommandCode),
    Status(StatusCode),
}

impl Code {
    pub fn space(self) -> CodeSpaceKind {
        match self {
            Code::Command(_) => CodeSpaceKind::Command,
            Code::Status(_) => CodeSpaceKind::Status,
        }
    }

    pub fn as_i64(self) -> i64 {
        match self {
            Code::Command(code) => code.as_i64(),
            Code::Status(code) => code.as_i64(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Code::Command(code) => code.name(),
            Code::Status(code) => code.name(),
        }
    }

    pub fn is_unknown(self) -> bool {
        match self {
            Code::Command(code) => code.is_unknown(),
            Code::Status(code) => code.is_unknown(),
        }
    }
}

impl From<CommandCode> for Code {
    fn from(code: CommandCode) -> Self {
        Code::Command(code)
    }
}

impl From<StatusCode> for Code {
    fn from(code: StatusCode) -> Self {
        Code::Status(code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Code::Command(code) => fmt::Display::fmt(code, f),
            Code::Status(code) => fmt::Display::fmt(code, f),
        }
    }
}

/// Resolve `raw` against the chosen space
pub fn resolve(space: CodeSpaceKind, raw: i64) -> Code {
    match space {
        CodeSpaceKind::Command => Code::Command(CommandCode::from_i64(raw)),
        CodeSpaceKind::Status => Code::Status(StatusCode::from_i64(raw)),
    }
}

/// Numeric wire value of any code, sentinel included
pub fn to_int(code: Code) -> i64 {
    code.as_i64()
}

/// Canonical display name of any code
pub fn display_name(code: Code) -> &'static str {
    code.name()
}

/// Parse a code literal as typed by a person: `1537`, `0x0601`, `-3`
///
/// This is for operator input only; wire values arrive as JSON integers.
/// Accepts the whole `i64` range, `i64::MIN` included. At most one leading
/// `-` is allowed, and it must come before any `0x` prefix.
pub fn parse_code_literal(text: &str) -> Result<i64> {
    let invalid = || WireError::InvalidCode(text.to_string());

    let trimmed = text.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (digits, radix) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (unsigned, 10),
    };

    // from_str_radix would take a second sign here
    if digits.starts_with(['+', '-']) {
        return Err(invalid());
    }

    let magnitude = u64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    let value = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.ok_or_else(invalid)
}

// =============================================================================
// Serde Helpers
// =============================================================================

// Codes travel as plain JSON integers. Deserialization goes through
// `CodeSpace::resolve`, so an unregistered number becomes the sentinel
// instead of a decode error.

pub(crate) fn serialize_code<C: CodeSpace, S: Serializer>(
    code: &C,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_i64(code.as_i64())
}

pub(crate) fn deserialize_code<'de, C: CodeSpace, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<C, D::Error> {
    deserializer.deserialize_i64(CodeVisitor::<C>(PhantomData))
}

struct CodeVisitor<C>(PhantomData<C>);

impl<'de, C: CodeSpace> Visitor<'de> for CodeVisitor<C> {
    type Value = C;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer {} code", C::SPACE)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<C, E> {
        Ok(C::resolve(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<C, E> {
        // Anything above i64::MAX cannot be registered
        Ok(i64::try_from(value).map(C::resolve).unwrap_or(C::UNKNOWN))
    }
}
