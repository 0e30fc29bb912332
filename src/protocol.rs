//! Protocol constants for the Monarch HD / HDX command interface.
//!
//! Every command token and URL piece is defined here so the rest of the
//! codebase references named constants instead of string literals.

use std::time::Duration;

// ---------------------------------------------------------------------------
// URL layout
// ---------------------------------------------------------------------------

/// Scheme used for every request; the device only speaks plain HTTP.
pub const SCHEME: &str = "http";

/// Fixed path of the command endpoint.
pub const SDK_PATH: &str = "/Monarch/syncconnect/sdk.aspx";

/// Query parameter carrying the command token.
pub const COMMAND_PARAM: &str = "command";

/// Separator between a command token and its arguments.
pub const ARG_SEPARATOR: char = ',';

// ---------------------------------------------------------------------------
// Connection defaults
// ---------------------------------------------------------------------------

/// Factory-default username.
pub const DEFAULT_USERNAME: &str = "admin";
/// Factory-default password.
pub const DEFAULT_PASSWORD: &str = "admin";
/// Request timeout used when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Commands shared by the HD and HDX
// ---------------------------------------------------------------------------

pub const CMD_GET_STATUS: &str = "GetStatus";
pub const CMD_STOP_STREAMING: &str = "StopStreaming";
pub const CMD_START_RECORDING: &str = "StartRecording";
pub const CMD_STOP_RECORDING: &str = "StopRecording";
pub const CMD_START_STREAMING_AND_RECORDING: &str = "StartStreamingAndRecording";
pub const CMD_STOP_STREAMING_AND_RECORDING: &str = "StopStreamingAndRecording";
pub const CMD_GET_STREAMING_VIDEO_DATA_RATE: &str = "GetStreamingVideoDataRate";
pub const CMD_SET_STREAMING_VIDEO_DATA_RATE: &str = "SetStreamingVideoDataRate";
pub const CMD_GET_RTSP: &str = "GetRTSP";
pub const CMD_SET_RTSP: &str = "SetRTSP";
pub const CMD_GET_RTMP: &str = "GetRTMP";
pub const CMD_SET_RTMP: &str = "SetRTMP";

// ---------------------------------------------------------------------------
// Model-specific commands
// ---------------------------------------------------------------------------

/// HD only: start streaming in RTMP mode.
pub const CMD_START_STREAMING: &str = "StartStreaming";
/// HDX only: prefix of `StartEncoder1` / `StartEncoder2`.
pub const CMD_START_ENCODER_PREFIX: &str = "StartEncoder";

/// Join a command token and its arguments with [`ARG_SEPARATOR`].
pub fn command_with_args(command: &str, args: &[&str]) -> String {
    let mut out = String::from(command);
    for arg in args {
        out.push(ARG_SEPARATOR);
        out.push_str(arg);
    }
    out
}
