//! Command construction and response mapping for both facades.
//!
//! A recording stub stands in for the device: it captures every command
//! string and answers with a canned body (or a canned transport error).

use std::cell::RefCell;

use monarch_control::{
    Acknowledgement, Encoder, MonarchDevice, MonarchError, MonarchHd, MonarchHdx, Reply,
    RtmpSettings, RtspSettings, Transport,
};

/// Helper: stub that answers every command with the same body.
struct StubDevice {
    reply: Result<String, u16>,
    sent: RefCell<Vec<String>>,
}

impl StubDevice {
    fn answering(body: &str) -> Self {
        Self { reply: Ok(body.to_string()), sent: RefCell::new(Vec::new()) }
    }

    fn failing_with_status(status: u16) -> Self {
        Self { reply: Err(status), sent: RefCell::new(Vec::new()) }
    }

    fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl Transport for StubDevice {
    fn send(&self, command: &str) -> Result<String, MonarchError> {
        self.sent.borrow_mut().push(command.to_string());
        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(MonarchError::HttpStatus { status: *status }),
        }
    }
}

// ── Monarch HD ────────────────────────────────────────────────────────

#[test]
fn hd_get_status_parses_device_text() {
    let stub = StubDevice::answering("RECORD:READY,STREAM:RTMP,ON,NAME:Chapel Cam");
    let hd = MonarchHd::with_transport(&stub);

    let status = hd.get_status().unwrap().success().unwrap();
    assert_eq!(status.record_state, "READY");
    assert_eq!(status.stream_mode, "RTMP");
    assert_eq!(status.stream_state, "ON");
    assert_eq!(status.name, "Chapel Cam");
    assert_eq!(stub.sent(), ["GetStatus"]);
}

#[test]
fn hd_get_status_mismatch_is_failed() {
    let stub = StubDevice::answering("ENC1:RTMP,ON,ENC2:RTSP,OFF,NAME:wrong model");
    let hd = MonarchHd::with_transport(&stub);
    assert_eq!(hd.get_status().unwrap(), Reply::Failed);
}

#[test]
fn hd_acknowledgement_commands() {
    let stub = StubDevice::answering("SUCCESS");
    let hd = MonarchHd::with_transport(&stub);

    assert_eq!(hd.start_streaming().unwrap(), Acknowledgement("SUCCESS".into()));
    hd.stop_streaming().unwrap();
    hd.start_recording().unwrap();
    hd.stop_recording().unwrap();
    hd.start_streaming_and_recording().unwrap();
    hd.stop_streaming_and_recording().unwrap();

    assert_eq!(
        stub.sent(),
        [
            "StartStreaming",
            "StopStreaming",
            "StartRecording",
            "StopRecording",
            "StartStreamingAndRecording",
            "StopStreamingAndRecording",
        ]
    );
}

#[test]
fn acknowledgement_is_not_validated() {
    let stub = StubDevice::answering("FAILED: not in RTMP mode");
    let hd = MonarchHd::with_transport(&stub);
    assert_eq!(hd.start_streaming().unwrap().text(), "FAILED: not in RTMP mode");
}

#[test]
fn hd_data_rate_get_and_set() {
    let stub = StubDevice::answering("BITRATE:5000");
    let hd = MonarchHd::with_transport(&stub);

    let rate = hd.get_streaming_video_data_rate().unwrap().success().unwrap();
    assert_eq!(rate.value, "5000");
    hd.set_streaming_video_data_rate(3500).unwrap();

    assert_eq!(stub.sent(), ["GetStreamingVideoDataRate", "SetStreamingVideoDataRate,3500"]);
}

#[test]
fn data_rate_mismatch_is_failed() {
    let stub = StubDevice::answering("NOPE");
    let hd = MonarchHd::with_transport(&stub);
    assert_eq!(hd.get_streaming_video_data_rate().unwrap(), Reply::Failed);
}

#[test]
fn hd_get_rtsp() {
    let stub = StubDevice::answering("10.0.0.5,mystream,554");
    let hd = MonarchHd::with_transport(&stub);
    assert_eq!(
        hd.get_rtsp().unwrap(),
        Reply::Success(RtspSettings {
            url: "10.0.0.5".into(),
            name: "mystream".into(),
            port: "554".into(),
        })
    );
    assert_eq!(stub.sent(), ["GetRTSP"]);
}

#[test]
fn set_rtsp_sends_every_argument() {
    let stub = StubDevice::answering("SUCCESS");
    let hd = MonarchHd::with_transport(&stub);
    hd.set_rtsp("10.0.0.5", 8554).unwrap();
    assert_eq!(stub.sent(), ["SetRTSP,10.0.0.5,8554"]);
}

#[test]
fn get_rtmp_failure_is_explicit() {
    let stub = StubDevice::answering("");
    let hd = MonarchHd::with_transport(&stub);
    assert_eq!(hd.get_rtmp().unwrap(), Reply::Failed);
    assert_eq!(stub.sent(), ["GetRTMP"]);
}

#[test]
fn set_rtmp_sends_every_argument() {
    let stub = StubDevice::answering("SUCCESS");
    let hd = MonarchHd::with_transport(&stub);
    hd.set_rtmp("rtmp://live.example.com/app", "key123", "user", "pass").unwrap();
    assert_eq!(stub.sent(), ["SetRTMP,rtmp://live.example.com/app,key123,user,pass"]);
}

// ── Monarch HDX ───────────────────────────────────────────────────────

#[test]
fn hdx_get_status_parses_both_encoders() {
    let stub = StubDevice::answering("ENC1:RTSP,ON,ENC2:RECORD,DISABLED,NAME:HDX Rack 2");
    let hdx = MonarchHdx::with_transport(&stub);

    let status = hdx.get_status().unwrap().success().unwrap();
    assert_eq!(status.encoder1.mode, "RTSP");
    assert_eq!(status.encoder1.state, "ON");
    assert_eq!(status.encoder2.mode, "RECORD");
    assert_eq!(status.encoder2.state, "DISABLED");
    assert_eq!(status.name, "HDX Rack 2");
}

#[test]
fn hdx_get_status_mismatch_is_failed() {
    let stub = StubDevice::answering("RECORD:ON,STREAM:RTMP,ON,NAME:hd");
    let hdx = MonarchHdx::with_transport(&stub);
    assert_eq!(hdx.get_status().unwrap(), Reply::Failed);
}

#[test]
fn hdx_start_encoder_token() {
    let stub = StubDevice::answering("SUCCESS");
    let hdx = MonarchHdx::with_transport(&stub);

    hdx.start_encoder(Encoder::One).unwrap();
    hdx.start_encoder(Encoder::try_from(2).unwrap()).unwrap();

    assert_eq!(stub.sent(), ["StartEncoder1", "StartEncoder2"]);
}

#[test]
fn hdx_shares_common_commands() {
    let stub = StubDevice::answering("SUCCESS");
    let hdx = MonarchHdx::with_transport(&stub);

    hdx.stop_streaming().unwrap();
    hdx.start_streaming_and_recording().unwrap();
    hdx.set_rtsp("192.168.0.9", 554).unwrap();
    hdx.set_rtmp("rtmp://x/app", "s", "u", "p").unwrap();

    assert_eq!(
        stub.sent(),
        [
            "StopStreaming",
            "StartStreamingAndRecording",
            "SetRTSP,192.168.0.9,554",
            "SetRTMP,rtmp://x/app,s,u,p",
        ]
    );
}

#[test]
fn hdx_parses_shared_queries() {
    let rate = StubDevice::answering("BITRATE:8000");
    let hdx = MonarchHdx::with_transport(&rate);
    assert_eq!(hdx.get_streaming_video_data_rate().unwrap().success().unwrap().kbps(), Some(8000));

    let rtsp = StubDevice::answering("192.168.0.9,encoder1,8554");
    let hdx = MonarchHdx::with_transport(&rtsp);
    assert_eq!(
        hdx.get_rtsp().unwrap(),
        Reply::Success(RtspSettings {
            url: "192.168.0.9".into(),
            name: "encoder1".into(),
            port: "8554".into(),
        })
    );

    let rtmp = StubDevice::answering("rtmp://live.example.com/app,key123");
    let hdx = MonarchHdx::with_transport(&rtmp);
    assert_eq!(
        hdx.get_rtmp().unwrap(),
        Reply::Success(RtmpSettings {
            url: "rtmp://live.example.com/app".into(),
            name: "key123".into(),
        })
    );

    assert_eq!(rate.sent(), ["GetStreamingVideoDataRate"]);
    assert_eq!(rtsp.sent(), ["GetRTSP"]);
    assert_eq!(rtmp.sent(), ["GetRTMP"]);
}

// ── Transport errors stay distinct ────────────────────────────────────

#[test]
fn transport_error_is_not_failed_reply() {
    let stub = StubDevice::failing_with_status(503);
    let hd = MonarchHd::with_transport(&stub);

    assert!(matches!(hd.get_status(), Err(MonarchError::HttpStatus { status: 503 })));
    assert!(matches!(hd.get_rtsp(), Err(MonarchError::HttpStatus { status: 503 })));
    assert!(matches!(hd.start_recording(), Err(MonarchError::HttpStatus { status: 503 })));
}

#[test]
fn hdx_transport_error_propagates() {
    let stub = StubDevice::failing_with_status(401);
    let hdx = MonarchHdx::with_transport(&stub);
    assert!(matches!(hdx.get_status(), Err(MonarchError::HttpStatus { status: 401 })));
    assert!(matches!(
        hdx.start_encoder(Encoder::Two),
        Err(MonarchError::HttpStatus { status: 401 })
    ));
}
