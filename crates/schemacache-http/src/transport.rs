// crates/schemacache-http/src/transport.rs
// ============================================================================
// Module: HTTP Registry Transport
// Description: Blocking HTTP client for the schema registry's JSON API.
// Purpose: Implement the registry transport contract once, with typed errors.
// Dependencies: schemacache-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! One blocking HTTP client implements all three registry operations:
//! register-schema-under-subject, fetch-schema-by-id, and
//! set-subject-compatibility. The configured timeout applies to the full
//! request lifecycle; on timeout the call returns
//! [`RegistryError::Transport`] and no caller-visible state changes. All
//! requests carry the registry's versioned schema JSON media type.
//!
//! Error classification per route: the two schema-resolution routes classify
//! HTTP 404 and 5xx by status before decoding; the compatibility route
//! inspects the envelope body first, because the registry reports rejected
//! policy changes through `error_code` rather than through the status line.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::blocking::Response;
use schemacache_core::CompatibilityLevel;
use schemacache_core::RegistryError;
use schemacache_core::RegistryTransport;
use schemacache_core::Schema;
use schemacache_core::SchemaId;
use serde::Deserialize;

use crate::wire::CompatibilityResponse;
use crate::wire::FetchSchemaResponse;
use crate::wire::RegisterSchemaRequest;
use crate::wire::RegisterSchemaResponse;
use crate::wire::SetCompatibilityRequest;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default registry base address.
pub const DEFAULT_REGISTRY_URL: &str = "http://localhost:8081";

/// Media type identifying the registry's versioned schema JSON API.
pub const REGISTRY_MEDIA_TYPE: &str = "application/vnd.schemaregistry.v1+json";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the HTTP registry transport.
///
/// # Invariants
/// - `timeout_ms` applies to the full request lifecycle.
/// - `base_url` is normalized at construction (no trailing slash).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpTransportConfig {
    /// Registry base URL.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_ms: 5_000,
            user_agent: "schemacache/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Transport Implementation
// ============================================================================

/// HTTP/JSON implementation of [`RegistryTransport`].
///
/// # Invariants
/// - The underlying client is built once and reused for every request.
/// - Every response is decoded into a typed envelope exactly once.
pub struct HttpRegistryTransport {
    /// Normalized base URL (no trailing slash).
    base_url: String,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpRegistryTransport {
    /// Creates a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::RequestBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: HttpTransportConfig) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| RegistryError::RequestBuild(err.to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::RequestBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        Self::new(HttpTransportConfig::default())
    }

    /// Returns the normalized registry base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a request and returns the status code plus the raw body text.
    fn send(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<String>,
    ) -> Result<(u16, String), RegistryError> {
        let mut request = self.client.request(method, url).header("Content-Type", REGISTRY_MEDIA_TYPE);
        if let Some(body) = body {
            request = request.body(body);
        }
        let response: Response =
            request.send().map_err(|err| RegistryError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let text = response.text().map_err(|err| RegistryError::Transport(err.to_string()))?;
        Ok((status, text))
    }
}

impl RegistryTransport for HttpRegistryTransport {
    fn register_schema(&self, subject: &str, schema: &Schema) -> Result<SchemaId, RegistryError> {
        let body = serde_json::to_string(&RegisterSchemaRequest {
            schema: schema.canonical_text(),
        })
        .map_err(|err| RegistryError::RequestBuild(err.to_string()))?;
        let url = format!("{}/subjects/{subject}/versions", self.base_url);
        let (status, text) = self.send(reqwest::Method::POST, &url, Some(body))?;
        classify_status(status, || format!("subject {subject}"))?;
        let envelope: RegisterSchemaResponse = decode(&text)?;
        if let Some(raw) = envelope.id {
            return SchemaId::from_raw(raw).ok_or(RegistryError::InvalidId {
                id: raw,
            });
        }
        if let Some(code) = envelope.error_code {
            return Err(RegistryError::Registry {
                code,
                message: envelope.message.unwrap_or_default(),
            });
        }
        Err(RegistryError::InvalidResponse(
            "registration response carries neither id nor error_code".to_string(),
        ))
    }

    fn fetch_schema(&self, id: SchemaId) -> Result<Schema, RegistryError> {
        let url = format!("{}/schemas/ids/{id}", self.base_url);
        let (status, text) = self.send(reqwest::Method::GET, &url, None)?;
        classify_status(status, || format!("schema id {id}"))?;
        let envelope: FetchSchemaResponse = decode(&text)?;
        if let Some(schema_text) = envelope.schema {
            return Schema::parse(&schema_text).map_err(|err| {
                RegistryError::InvalidResponse(format!("registry schema body did not parse: {err}"))
            });
        }
        if let Some(code) = envelope.error_code {
            return Err(RegistryError::Registry {
                code,
                message: envelope.message.unwrap_or_default(),
            });
        }
        Err(RegistryError::InvalidResponse(
            "schema response carries neither schema nor error_code".to_string(),
        ))
    }

    fn set_compatibility(
        &self,
        subject: &str,
        level: CompatibilityLevel,
    ) -> Result<CompatibilityLevel, RegistryError> {
        let body = serde_json::to_string(&SetCompatibilityRequest {
            compatibility: level.as_str(),
        })
        .map_err(|err| RegistryError::RequestBuild(err.to_string()))?;
        let url = format!("{}/config/{subject}", self.base_url);
        let (status, text) = self.send(reqwest::Method::PUT, &url, Some(body))?;
        // Body first: the registry reports rejected policy changes through
        // error_code regardless of the status line.
        let envelope: CompatibilityResponse = decode(&text)?;
        if let Some(value) = envelope.compatibility {
            return CompatibilityLevel::from_str(&value)
                .map_err(|err| RegistryError::InvalidResponse(err.to_string()));
        }
        if let Some(code) = envelope.error_code {
            return Err(RegistryError::Registry {
                code,
                message: envelope.message.unwrap_or_default(),
            });
        }
        classify_status(status, || format!("subject {subject}"))?;
        Err(RegistryError::InvalidResponse(
            "compatibility response carries neither compatibility nor error_code".to_string(),
        ))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps HTTP 404 and 5xx statuses onto the core error taxonomy.
fn classify_status(status: u16, what: impl FnOnce() -> String) -> Result<(), RegistryError> {
    if status == 404 {
        return Err(RegistryError::NotFound {
            what: what(),
        });
    }
    if (500..=599).contains(&status) {
        return Err(RegistryError::Backend {
            status,
        });
    }
    Ok(())
}

/// Decodes a response body into a typed envelope.
fn decode<'a, E: Deserialize<'a>>(text: &'a str) -> Result<E, RegistryError> {
    serde_json::from_str(text).map_err(|err| RegistryError::InvalidResponse(err.to_string()))
}
