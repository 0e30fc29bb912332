//! Typed views over the state strings a Monarch reports.
//!
//! Responses are kept as raw text in the result structs; these enums are
//! derived on demand and never replace what the device actually sent.

use std::fmt;

use crate::error::MonarchError;

/// A value reported by the device that may be a known variant or text the
/// library does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceValue<T> {
    /// A recognized, strongly-typed value.
    Known(T),
    /// Unrecognized text from the device, verbatim.
    Unknown(String),
}

impl<T> DeviceValue<T> {
    pub(crate) fn decode(raw: &str, parse: fn(&str) -> Option<T>) -> Self {
        match parse(raw) {
            Some(v) => Self::Known(v),
            None => Self::Unknown(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<&T> {
        match self {
            Self::Known(v) => Some(v),
            Self::Unknown(_) => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for DeviceValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(v) => write!(f, "{}", v),
            Self::Unknown(s) => write!(f, "Unknown ({})", s),
        }
    }
}

/// State of the record or stream function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityState {
    On,
    Off,
    Ready,
    Disabled,
}

impl ActivityState {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "ON" => Some(Self::On),
            "OFF" => Some(Self::Off),
            "READY" => Some(Self::Ready),
            "DISABLED" => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl fmt::Display for ActivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "On"),
            Self::Off => write!(f, "Off"),
            Self::Ready => write!(f, "Ready"),
            Self::Disabled => write!(f, "Disabled"),
        }
    }
}

/// Streaming protocol the HD is set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMode {
    Rtsp,
    Rtmp,
}

impl StreamMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RTSP" => Some(Self::Rtsp),
            "RTMP" => Some(Self::Rtmp),
            _ => None,
        }
    }
}

impl fmt::Display for StreamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rtsp => write!(f, "RTSP"),
            Self::Rtmp => write!(f, "RTMP"),
        }
    }
}

/// Encoding mode of one HDX encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderMode {
    Rtsp,
    Rtmp,
    Record,
    None,
}

impl EncoderMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RTSP" => Some(Self::Rtsp),
            "RTMP" => Some(Self::Rtmp),
            "RECORD" => Some(Self::Record),
            "NONE" => Some(Self::None),
            _ => None,
        }
    }
}

impl fmt::Display for EncoderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rtsp => write!(f, "RTSP"),
            Self::Rtmp => write!(f, "RTMP"),
            Self::Record => write!(f, "Record"),
            Self::None => write!(f, "None"),
        }
    }
}

/// One of the two HDX encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    One,
    Two,
}

impl Encoder {
    /// Index used in `StartEncoder<n>`.
    pub fn index(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for Encoder {
    type Error = MonarchError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(MonarchError::InvalidEncoder(other)),
        }
    }
}

impl fmt::Display for Encoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoder {}", self.index())
    }
}
