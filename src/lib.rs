//! Matrox Monarch HD/HDX controller library.
//!
//! Drives Monarch HD (single encoder) and Monarch HDX (dual encoder) video
//! encoders through their HTTP command interface.
//!
//! # Quick Start
//!
//! ```no_run
//! use monarch_control::{MonarchDevice, MonarchHd, Reply};
//!
//! let monarch = MonarchHd::with_credentials("192.168.1.20", "admin", "admin")?;
//!
//! if let Reply::Success(status) = monarch.get_status()? {
//!     println!("{}: stream {} ({})", status.name, status.stream_state, status.stream_mode);
//! }
//!
//! monarch.set_streaming_video_data_rate(4000)?;
//! monarch.start_streaming()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod device;
mod error;
mod protocol;
mod response;
mod transport;
mod values;

pub use config::{ConnectionConfig, Credentials};
pub use device::{MonarchDevice, MonarchHd, MonarchHdx};
pub use error::MonarchError;
pub use protocol::{DEFAULT_PASSWORD, DEFAULT_TIMEOUT, DEFAULT_USERNAME};
pub use response::{
    Acknowledgement, Bitrate, EncoderStatus, HdStatus, HdxStatus, Reply, RtmpSettings, RtspSettings,
};
pub use transport::{HttpTransport, Transport, command_url};
pub use values::{ActivityState, DeviceValue, Encoder, EncoderMode, StreamMode};
