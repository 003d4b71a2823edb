// Device-inventory HTTP client
//
// Wraps `reqwest::Client` with DNA Center URL construction and envelope
// unwrapping. The query endpoints live in `devices.rs` as inherent
// methods, keeping this module focused on transport mechanics.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::IntentEnvelope;
use crate::session::ControllerSession;
use crate::transport::TransportConfig;

/// Client for the controller's network-device inventory resource.
///
/// Handles the `{"response": [...]}` envelope and the version-dependent
/// resource path. All methods return the unwrapped `response` payload --
/// the envelope is stripped before the caller sees it.
///
/// Construct one per controller, give it a name, and keep it in whatever
/// map the application uses to look up API handles:
///
/// ```no_run
/// # use std::collections::HashMap;
/// # use std::sync::Arc;
/// # use dnac_api::{ControllerSession, NetworkDeviceClient};
/// # fn demo(session: Arc<ControllerSession>) -> Result<(), dnac_api::Error> {
/// let mut apis: HashMap<String, NetworkDeviceClient> = HashMap::new();
/// let nd = NetworkDeviceClient::new(session, "network-device")?;
/// apis.insert(nd.name().to_owned(), nd);
/// # Ok(())
/// # }
/// ```
pub struct NetworkDeviceClient {
    session: Arc<ControllerSession>,
    name: String,
    resource_path: &'static str,
    http: reqwest::Client,
    request_timeout: Option<Duration>,
}

impl NetworkDeviceClient {
    /// Create a client sharing the session's HTTP handle and policy.
    ///
    /// Fails with [`Error::UnsupportedVersion`] when the session's
    /// controller version has no known inventory resource path.
    pub fn new(session: Arc<ControllerSession>, name: impl Into<String>) -> Result<Self, Error> {
        let resource_path = resolve_resource_path(&session)?;
        let http = session.http().clone();
        Ok(Self {
            session,
            name: name.into(),
            resource_path,
            http,
            request_timeout: None,
        })
    }

    /// Create a client with its own transport policy (TLS mode, timeout),
    /// diverging from the session's defaults. The session still supplies
    /// the base URL, version, and auth header.
    pub fn with_transport(
        session: Arc<ControllerSession>,
        name: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let resource_path = resolve_resource_path(&session)?;
        let http = transport.build_client_with_headers(session.auth_headers()?)?;
        Ok(Self {
            session,
            name: name.into(),
            resource_path,
            http,
            request_timeout: None,
        })
    }

    /// Override the timeout for this client's requests without rebuilding
    /// the HTTP handle.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// The handle name this client was created with.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved inventory resource path.
    pub fn resource_path(&self) -> &str {
        self.resource_path
    }

    /// The session this client talks through.
    pub fn session(&self) -> &ControllerSession {
        &self.session
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build `{base}{resource_path}{suffix}`. The base URL's trailing
    /// slash is trimmed so the resource path never doubles it.
    pub(crate) fn resource_url(&self, suffix: &str) -> Result<Url, Error> {
        let base = self.session.base_url().as_str().trim_end_matches('/');
        let full = format!("{base}{}{suffix}", self.resource_path);
        Url::parse(&full).map_err(Error::InvalidUrl)
    }

    // ── Request helper ───────────────────────────────────────────────

    /// Send a GET and unwrap the intent envelope.
    ///
    /// `context` names the calling operation; it travels with
    /// [`Error::RequestFailed`] so callers can tell which query failed.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<Vec<T>, Error> {
        debug!("GET {url}");

        let mut request = self.http.get(url);
        if let Some(timeout) = self.request_timeout {
            request = request.timeout(timeout);
        }
        let resp = request.send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::RequestFailed {
                status: status.as_u16(),
                context: context.to_owned(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        let envelope: IntentEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| Error::MalformedResponse {
                message: e.to_string(),
                body,
            })?;

        Ok(envelope.response)
    }
}

fn resolve_resource_path(session: &ControllerSession) -> Result<&'static str, Error> {
    session
        .version()
        .network_device_path()
        .ok_or_else(|| Error::UnsupportedVersion {
            version: session.version().to_string(),
        })
}
