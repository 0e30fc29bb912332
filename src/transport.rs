//! HTTP transport for the Monarch command endpoint.
//!
//! Every device command is a single authenticated GET:
//!   `http://{address}/Monarch/syncconnect/sdk.aspx?command={command}`
//! and the response body is plain text.  Commas between arguments go out
//! unescaped, as the device expects; bytes that would break the query string
//! are percent-encoded.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use ureq::Agent;

use crate::config::{ConnectionConfig, Credentials};
use crate::error::MonarchError;
use crate::protocol::{ARG_SEPARATOR, COMMAND_PARAM, SCHEME, SDK_PATH};

/// Sends one command to a device and returns the decoded response body.
///
/// Implemented by [`HttpTransport`]; tests substitute their own.
pub trait Transport {
    fn send(&self, command: &str) -> Result<String, MonarchError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, command: &str) -> Result<String, MonarchError> {
        (**self).send(command)
    }
}

/// Blocking `ureq` transport bound to one device.
pub struct HttpTransport {
    agent: Agent,
    config: ConnectionConfig,
    authorization: Option<String>,
}

impl HttpTransport {
    pub fn new(config: ConnectionConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(config.request_timeout()))
            .build();
        let agent = Agent::new_with_config(agent_config);
        let authorization = config.auth().map(basic_auth_header);

        Self { agent, config, authorization }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Full request URL for `command` on this transport's device.
    pub fn url_for(&self, command: &str) -> String {
        command_url(self.config.address(), command)
    }
}

impl Transport for HttpTransport {
    fn send(&self, command: &str) -> Result<String, MonarchError> {
        if command.is_empty() {
            return Err(MonarchError::EmptyCommand);
        }

        let url = self.url_for(command);
        // Arguments can carry RTMP passwords, so only the token is logged.
        let token = command.split(ARG_SEPARATOR).next().unwrap_or(command);
        log::debug!("Sending {} to {}", token, self.config.address());

        let mut request = self.agent.get(url.as_str());
        if let Some(value) = &self.authorization {
            request = request.header("Authorization", value.as_str());
        }

        let mut response = request.call().map_err(|e| {
            log::warn!("{} to {} failed: {}", token, self.config.address(), e);
            MonarchError::from(e)
        })?;
        let body = response.body_mut().read_to_string()?;

        log::trace!("{} -> {:?}", token, body);
        Ok(body)
    }
}

/// Build the command URL for `address` (`host` or `host:port`).
pub fn command_url(address: &str, command: &str) -> String {
    format!(
        "{}://{}{}?{}={}",
        SCHEME,
        address,
        SDK_PATH,
        COMMAND_PARAM,
        escape_command(command)
    )
}

/// `Authorization` header value for HTTP Basic authentication.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Bytes escaped in the command value. Commas, `:` and `/` stay literal so
/// arguments and RTMP URLs reach the device as written; `+` is escaped because
/// the endpoint decodes it as a space.
const COMMAND_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn escape_command(command: &str) -> String {
    utf8_percent_encode(command, COMMAND_SET).to_string()
}
