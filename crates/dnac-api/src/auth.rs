use secrecy::SecretString;

/// Credentials for authenticating with a DNA Center controller.
///
/// Each variant carries the secret material for its flow; branching on the
/// variant never exposes the secret itself.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Username/password pair exchanged for an `X-Auth-Token` when the
    /// session is built (`POST /dna/system/api/v1/auth/token`).
    Basic {
        username: String,
        password: SecretString,
    },

    /// Pre-acquired auth token. No token exchange is performed.
    Token(SecretString),
}
