//! Response parsing for Monarch query commands.
//!
//! Every query answers with a fixed, case-insensitive text grammar:
//!
//! - HD `GetStatus`: `RECORD:<state>,STREAM:<mode>,<state>,NAME:<name>`
//! - HDX `GetStatus`: `ENC1:<mode>,<state>,ENC2:<mode>,<state>,NAME:<name>`
//! - `GetStreamingVideoDataRate`: `BITRATE:<kbps>`
//! - `GetRTSP`: `<url>,<name>,<port>`
//! - `GetRTMP`: `<url>,<name>`
//!
//! A body that does not match yields [`Reply::Failed`].  Start/stop/set
//! commands are not parsed at all; their text comes back as an
//! [`Acknowledgement`].

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::values::{ActivityState, DeviceValue, EncoderMode, StreamMode};

// ---------------------------------------------------------------------------
// Grammars
// ---------------------------------------------------------------------------

static HD_STATUS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)RECORD:(?P<record_state>[A-Z]+),STREAM:(?P<stream_mode>[A-Z]+),(?P<stream_state>[A-Z]+),NAME:(?P<name>.+)$")
});

static HDX_STATUS: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)ENC1:(?P<enc1_mode>[A-Z]+),(?P<enc1_state>[A-Z]+),ENC2:(?P<enc2_mode>[A-Z]+),(?P<enc2_state>[A-Z]+),NAME:(?P<name>.+)$")
});

static BITRATE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)BITRATE:(?P<bitrate>[A-Z0-9]+)$"));

static RTSP: LazyLock<Regex> = LazyLock::new(|| compile(r"(?P<url>.+),(?P<name>.+),(?P<port>.+)"));

static RTMP: LazyLock<Regex> = LazyLock::new(|| compile(r"(?P<url>.+),(?P<name>.+)"));

fn compile(pattern: &str) -> Regex {
    // Patterns are literals covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid response grammar {pattern:?}: {e}"))
}

// ---------------------------------------------------------------------------
// Result wrappers
// ---------------------------------------------------------------------------

/// Outcome of a query command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// The response matched the command's grammar.
    Success(T),
    /// The response did not match.
    Failed,
}

impl<T> Reply<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failed => None,
        }
    }

    pub fn as_ref(&self) -> Reply<&T> {
        match self {
            Self::Success(v) => Reply::Success(v),
            Self::Failed => Reply::Failed,
        }
    }

    fn from_option(value: Option<T>, what: &str, raw: &str) -> Self {
        match value {
            Some(v) => Self::Success(v),
            None => {
                // Bodies can echo RTMP stream keys; only trace shows them.
                log::warn!("Unexpected {} response ({} bytes)", what, raw.len());
                log::trace!("Unmatched {} body: {:?}", what, raw);
                Self::Failed
            }
        }
    }
}

/// Verbatim device text returned by a start/stop/set command.
///
/// This is an echo of whatever the device said, not a parsed status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement(pub String);

impl Acknowledgement {
    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Parsed values
// ---------------------------------------------------------------------------

/// Record and stream status of a Monarch HD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdStatus {
    pub record_state: String,
    pub stream_mode: String,
    pub stream_state: String,
    pub name: String,
}

impl HdStatus {
    pub fn record(&self) -> DeviceValue<ActivityState> {
        DeviceValue::decode(&self.record_state, ActivityState::from_str)
    }

    pub fn mode(&self) -> DeviceValue<StreamMode> {
        DeviceValue::decode(&self.stream_mode, StreamMode::from_str)
    }

    pub fn stream(&self) -> DeviceValue<ActivityState> {
        DeviceValue::decode(&self.stream_state, ActivityState::from_str)
    }

    pub fn is_recording(&self) -> bool {
        self.record() == DeviceValue::Known(ActivityState::On)
    }

    pub fn is_streaming(&self) -> bool {
        self.stream() == DeviceValue::Known(ActivityState::On)
    }
}

/// Mode and state of one HDX encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderStatus {
    pub mode: String,
    pub state: String,
}

impl EncoderStatus {
    pub fn encoder_mode(&self) -> DeviceValue<EncoderMode> {
        DeviceValue::decode(&self.mode, EncoderMode::from_str)
    }

    pub fn activity(&self) -> DeviceValue<ActivityState> {
        DeviceValue::decode(&self.state, ActivityState::from_str)
    }

    pub fn is_active(&self) -> bool {
        self.activity() == DeviceValue::Known(ActivityState::On)
    }
}

/// Status of both encoders of a Monarch HDX.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HdxStatus {
    pub encoder1: EncoderStatus,
    pub encoder2: EncoderStatus,
    pub name: String,
}

/// Programmed average video data rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitrate {
    pub value: String,
}

impl Bitrate {
    /// The rate in kb/s, when the device reported a number.
    pub fn kbps(&self) -> Option<u32> {
        self.value.parse().ok()
    }
}

/// RTSP endpoint programmed on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtspSettings {
    pub url: String,
    pub name: String,
    pub port: String,
}

impl RtspSettings {
    pub fn port_number(&self) -> Option<u16> {
        self.port.trim().parse().ok()
    }
}

/// RTMP endpoint programmed on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RtmpSettings {
    pub url: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

pub fn parse_hd_status(raw: &str) -> Reply<HdStatus> {
    let parsed = HD_STATUS.captures(raw.trim_end()).map(|c| HdStatus {
        record_state: c["record_state"].to_string(),
        stream_mode: c["stream_mode"].to_string(),
        stream_state: c["stream_state"].to_string(),
        name: c["name"].to_string(),
    });
    Reply::from_option(parsed, "GetStatus", raw)
}

pub fn parse_hdx_status(raw: &str) -> Reply<HdxStatus> {
    let parsed = HDX_STATUS.captures(raw.trim_end()).map(|c| HdxStatus {
        encoder1: EncoderStatus {
            mode: c["enc1_mode"].to_string(),
            state: c["enc1_state"].to_string(),
        },
        encoder2: EncoderStatus {
            mode: c["enc2_mode"].to_string(),
            state: c["enc2_state"].to_string(),
        },
        name: c["name"].to_string(),
    });
    Reply::from_option(parsed, "GetStatus", raw)
}

pub fn parse_bitrate(raw: &str) -> Reply<Bitrate> {
    let parsed = BITRATE
        .captures(raw.trim_end())
        .map(|c| Bitrate { value: c["bitrate"].to_string() });
    Reply::from_option(parsed, "GetStreamingVideoDataRate", raw)
}

pub fn parse_rtsp(raw: &str) -> Reply<RtspSettings> {
    let parsed = RTSP.captures(raw.trim_end()).map(|c| RtspSettings {
        url: c["url"].to_string(),
        name: c["name"].to_string(),
        port: c["port"].to_string(),
    });
    Reply::from_option(parsed, "GetRTSP", raw)
}

pub fn parse_rtmp(raw: &str) -> Reply<RtmpSettings> {
    let parsed = RTMP.captures(raw.trim_end()).map(|c| RtmpSettings {
        url: c["url"].to_string(),
        name: c["name"].to_string(),
    });
    Reply::from_option(parsed, "GetRTMP", raw)
}
