//! Device facades for the Monarch HD and Monarch HDX.
//!
//! Both models share most of their command set; those commands live on the
//! [`MonarchDevice`] trait as provided methods.  [`MonarchHd`] and
//! [`MonarchHdx`] add their model-specific status parser and start command.
//! Each facade owns its [`Transport`] and every method issues exactly one
//! request.

use crate::config::ConnectionConfig;
use crate::error::MonarchError;
use crate::protocol::*;
use crate::response::{
    self, Acknowledgement, Bitrate, HdStatus, HdxStatus, Reply, RtmpSettings, RtspSettings,
};
use crate::transport::{HttpTransport, Transport};
use crate::values::Encoder;

/// Commands common to the Monarch HD and HDX.
pub trait MonarchDevice {
    type Transport: Transport;

    /// The transport this device sends commands through.
    fn transport(&self) -> &Self::Transport;

    /// Send a raw command and return the device's text verbatim.
    fn acknowledge(&self, command: &str) -> Result<Acknowledgement, MonarchError> {
        self.transport().send(command).map(Acknowledgement)
    }

    /// Stop streaming on a device set to RTMP mode.
    fn stop_streaming(&self) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(CMD_STOP_STREAMING)
    }

    fn start_recording(&self) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(CMD_START_RECORDING)
    }

    fn stop_recording(&self) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(CMD_STOP_RECORDING)
    }

    /// Start streaming (RTMP mode) and recording simultaneously.
    fn start_streaming_and_recording(&self) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(CMD_START_STREAMING_AND_RECORDING)
    }

    /// Stop streaming (RTMP mode) and recording simultaneously.
    fn stop_streaming_and_recording(&self) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(CMD_STOP_STREAMING_AND_RECORDING)
    }

    /// Average video data rate (kb/s) currently programmed.
    fn get_streaming_video_data_rate(&self) -> Result<Reply<Bitrate>, MonarchError> {
        let raw = self.transport().send(CMD_GET_STREAMING_VIDEO_DATA_RATE)?;
        Ok(response::parse_bitrate(&raw))
    }

    /// Change the data rate (kb/s) without stopping a running stream.
    fn set_streaming_video_data_rate(&self, kbps: u32) -> Result<Acknowledgement, MonarchError> {
        let kbps = kbps.to_string();
        self.acknowledge(&command_with_args(CMD_SET_STREAMING_VIDEO_DATA_RATE, &[&kbps]))
    }

    /// URL, name and port currently programmed for RTSP streaming.
    fn get_rtsp(&self) -> Result<Reply<RtspSettings>, MonarchError> {
        let raw = self.transport().send(CMD_GET_RTSP)?;
        Ok(response::parse_rtsp(&raw))
    }

    /// Set the RTSP URL and port; also switches the device to RTSP mode.
    fn set_rtsp(&self, url: &str, port: u16) -> Result<Acknowledgement, MonarchError> {
        let port = port.to_string();
        self.acknowledge(&command_with_args(CMD_SET_RTSP, &[url, &port]))
    }

    /// RTMP URL and stream name currently programmed.
    fn get_rtmp(&self) -> Result<Reply<RtmpSettings>, MonarchError> {
        let raw = self.transport().send(CMD_GET_RTMP)?;
        Ok(response::parse_rtmp(&raw))
    }

    /// Configure RTMP and switch the device to RTMP mode.
    fn set_rtmp(
        &self,
        url: &str,
        stream: &str,
        username: &str,
        password: &str,
    ) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(&command_with_args(CMD_SET_RTMP, &[url, stream, username, password]))
    }
}

// ---------------------------------------------------------------------------
// Monarch HD
// ---------------------------------------------------------------------------

/// Handle to a single-encoder Monarch HD.
pub struct MonarchHd<T = HttpTransport> {
    transport: T,
}

impl MonarchHd<HttpTransport> {
    /// Connect with the factory credentials (admin/admin).
    pub fn connect(address: impl Into<String>) -> Result<Self, MonarchError> {
        Ok(Self::with_config(ConnectionConfig::new(address)?))
    }

    /// Connect with explicit credentials. An empty `username` sends
    /// unauthenticated requests.
    pub fn with_credentials(
        address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, MonarchError> {
        let config = ConnectionConfig::new(address)?.credentials(username, password);
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: ConnectionConfig) -> Self {
        Self::with_transport(HttpTransport::new(config))
    }
}

impl<T: Transport> MonarchHd<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Current record and stream status.
    pub fn get_status(&self) -> Result<Reply<HdStatus>, MonarchError> {
        let raw = self.transport.send(CMD_GET_STATUS)?;
        Ok(response::parse_hd_status(&raw))
    }

    /// Start streaming on a device set to RTMP mode.
    pub fn start_streaming(&self) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(CMD_START_STREAMING)
    }
}

impl<T: Transport> MonarchDevice for MonarchHd<T> {
    type Transport = T;

    fn transport(&self) -> &T {
        &self.transport
    }
}

// ---------------------------------------------------------------------------
// Monarch HDX
// ---------------------------------------------------------------------------

/// Handle to a dual-encoder Monarch HDX.
pub struct MonarchHdx<T = HttpTransport> {
    transport: T,
}

impl MonarchHdx<HttpTransport> {
    /// Connect with the factory credentials (admin/admin).
    pub fn connect(address: impl Into<String>) -> Result<Self, MonarchError> {
        Ok(Self::with_config(ConnectionConfig::new(address)?))
    }

    /// Connect with explicit credentials. An empty `username` sends
    /// unauthenticated requests.
    pub fn with_credentials(
        address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, MonarchError> {
        let config = ConnectionConfig::new(address)?.credentials(username, password);
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: ConnectionConfig) -> Self {
        Self::with_transport(HttpTransport::new(config))
    }
}

impl<T: Transport> MonarchHdx<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Mode and state of both encoders.
    pub fn get_status(&self) -> Result<Reply<HdxStatus>, MonarchError> {
        let raw = self.transport.send(CMD_GET_STATUS)?;
        Ok(response::parse_hdx_status(&raw))
    }

    /// Start `encoder` in its configured mode (RTSP, RTMP or record).
    ///
    /// When the encoder is in RTMP mode this also starts streaming.
    pub fn start_encoder(&self, encoder: Encoder) -> Result<Acknowledgement, MonarchError> {
        self.acknowledge(&format!("{}{}", CMD_START_ENCODER_PREFIX, encoder.index()))
    }
}

impl<T: Transport> MonarchDevice for MonarchHdx<T> {
    type Transport = T;

    fn transport(&self) -> &T {
        &self.transport
    }
}
