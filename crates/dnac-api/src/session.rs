// DNA Center session
//
// Owns the controller base URL, the parsed version, the auth token, and
// the shared HTTP client. Built once per controller and shared (behind an
// `Arc`) by every API client that talks to it. Immutable after
// construction -- token refresh is the caller's concern.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::auth::Credentials;
use crate::error::Error;
use crate::transport::TransportConfig;
use crate::version::ControllerVersion;

/// Token exchange endpoint. Basic-auth POST, token in the JSON body.
const AUTH_TOKEN_PATH: &str = "/dna/system/api/v1/auth/token";

/// Header carrying the session token on every intent API request.
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(rename = "Token")]
    token: String,
}

/// An authenticated connection to one DNA Center controller.
///
/// Read-only once constructed; multiple API clients may share a session
/// concurrently.
pub struct ControllerSession {
    http: reqwest::Client,
    base_url: Url,
    version: ControllerVersion,
    token: SecretString,
    transport: TransportConfig,
}

impl ControllerSession {
    /// Authenticate against the controller and build a session.
    ///
    /// With [`Credentials::Basic`] this performs the token exchange; with
    /// [`Credentials::Token`] no network I/O happens.
    pub async fn connect(
        base_url: Url,
        version: ControllerVersion,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let token = match credentials {
            Credentials::Token(token) => token,
            Credentials::Basic { username, password } => {
                fetch_token(&base_url, &username, &password, transport).await?
            }
        };
        Self::with_token(base_url, version, token, transport)
    }

    /// Build a session from a pre-acquired token. No network I/O.
    pub fn with_token(
        base_url: Url,
        version: ControllerVersion,
        token: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let headers = auth_header_map(&token)?;
        let http = transport.build_client_with_headers(headers)?;
        Ok(Self {
            http,
            base_url,
            version,
            token,
            transport: transport.clone(),
        })
    }

    /// The controller base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The controller software version this session was built for.
    pub fn version(&self) -> ControllerVersion {
        self.version
    }

    /// The transport policy the session's HTTP client was built with.
    pub fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    /// The shared HTTP client, already carrying the auth header.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Header map for clients that build their own transport
    /// (per-client TLS/timeout overrides).
    pub fn auth_headers(&self) -> Result<HeaderMap, Error> {
        auth_header_map(&self.token)
    }
}

fn auth_header_map(token: &SecretString) -> Result<HeaderMap, Error> {
    let mut value =
        HeaderValue::from_str(token.expose_secret()).map_err(|_| Error::Authentication {
            message: "auth token is not a valid header value".into(),
        })?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTH_TOKEN_HEADER, value);
    Ok(headers)
}

async fn fetch_token(
    base_url: &Url,
    username: &str,
    password: &SecretString,
    transport: &TransportConfig,
) -> Result<SecretString, Error> {
    let url = base_url.join(AUTH_TOKEN_PATH).map_err(Error::InvalidUrl)?;
    debug!("requesting auth token at {url}");

    let http = transport.build_client()?;
    let resp = http
        .post(url)
        .basic_auth(username, Some(password.expose_secret()))
        .send()
        .await
        .map_err(Error::Transport)?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(Error::Authentication {
            message: format!("token request failed (HTTP {status}): {body}"),
        });
    }

    let body: TokenResponse = resp.json().await.map_err(Error::Transport)?;
    debug!("token exchange successful");
    Ok(SecretString::from(body.token))
}
