//! Configuration for the GitRot client

use http::HeaderMap;
use std::time::Duration;

/// Deployment environment the client targets.
///
/// The hosted frontend prefixes API routes with `/api` in production
/// deployments and talks to the backend directly in development. The
/// prefix can always be overridden explicitly via
/// [`ClientConfig::api_prefix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development: no route prefix.
    #[default]
    Development,
    /// Production deployment: routes live under `/api`.
    Production,
}

impl Environment {
    /// The API route prefix implied by this environment.
    pub fn default_api_prefix(self) -> &'static str {
        match self {
            Environment::Development => "",
            Environment::Production => "/api",
        }
    }

    /// Whether this is a production environment.
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Configuration for the GitRot client.
///
/// All fields have sensible defaults: an unset base URL falls back to
/// [`crate::DEFAULT_BASE_URL`], and an unset API prefix is derived from
/// the [`Environment`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the GitRot backend
    pub base_url: Option<String>,

    /// Route prefix inserted between the base URL and every endpoint path.
    /// When `None`, the prefix is derived from `environment`.
    pub api_prefix: Option<String>,

    /// Deployment environment (drives the default API prefix)
    pub environment: Environment,

    /// Default timeout for requests
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_prefix: None,
            environment: Environment::default(),
            timeout: Duration::from_secs(120), // README generation can take a while
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with a base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Default::default()
        }
    }

    /// The API prefix that will actually be used: the explicit override
    /// when set, otherwise the environment's default.
    pub fn effective_api_prefix(&self) -> &str {
        match &self.api_prefix {
            Some(prefix) => prefix,
            None => self.environment.default_api_prefix(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `GITROT_API_URL` for the backend base URL
    /// - `GITROT_API_PREFIX` for an explicit route prefix
    /// - `GITROT_ENV` for the environment (`production`/`prod` or anything else)
    /// - `GITROT_TIMEOUT` for request timeout (in seconds)
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        // Pick up a local .env file before reading variables
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(base_url) = env::var("GITROT_API_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(api_prefix) = env::var("GITROT_API_PREFIX") {
            config.api_prefix = Some(api_prefix);
        }

        if let Ok(environment) = env::var("GITROT_ENV") {
            config.environment = match environment.to_lowercase().as_str() {
                "production" | "prod" => Environment::Production,
                _ => Environment::Development,
            };
        }

        if let Ok(timeout_str) = env::var("GITROT_TIMEOUT")
            && let Ok(timeout_secs) = timeout_str.parse::<u64>()
        {
            config.timeout = Duration::from_secs(timeout_secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.api_prefix.is_some() {
            self.api_prefix = other.api_prefix;
        }
        if other.environment != Environment::default() {
            self.environment = other.environment;
        }
        if other.timeout != Duration::from_secs(120) {
            self.timeout = other.timeout;
        }
        if !other.default_headers.is_empty() {
            for (key, value) in other.default_headers.iter() {
                self.default_headers.insert(key.clone(), value.clone());
            }
        }

        self
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set an explicit API prefix, overriding the environment default.
    pub fn api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.config.api_prefix = Some(api_prefix.into());
        self
    }

    /// Set the deployment environment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
