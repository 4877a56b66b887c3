//! Main client implementation for the GitRot backend API

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Duration;

use url::Url;

use crate::{
    catalog::ModelCatalog,
    config::{ClientConfig, Environment},
    error::{Error, Result},
    http::RequestBuilder,
    resources::{Auth, Health, Readmes},
};

/// Main client for interacting with the GitRot backend.
///
/// The client owns a shared HTTP connection pool, the model catalog used to
/// build generation payloads, and lazy handles to the API resources.
/// Cloning is cheap; all clones share the same underlying state.
///
/// # Example
///
/// ```rust,no_run
/// use gitrot_client::Client;
///
/// let client = Client::new();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    /// Shared HTTP connection pool.
    http_client: reqwest::Client,

    /// Parsed, scheme-validated base URL.
    base_url: Url,

    /// Prefix prepended to every request path ("" or "/api").
    api_prefix: String,

    timeout: Duration,
    default_headers: http::HeaderMap,

    /// Catalog consulted when building generation payloads.
    catalog: ModelCatalog,

    // Lazy-initialized resources (like Python's @cached_property)
    readmes: OnceLock<Readmes>,
    auth: OnceLock<Auth>,
    health: OnceLock<Health>,
}

impl Client {
    /// Create a new client with the default configuration.
    ///
    /// The default configuration targets `http://localhost:8000` with no API
    /// prefix and the built-in model catalog. Use [`Client::builder()`] or
    /// [`ClientConfig`] to point the client elsewhere.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the
    /// default configuration. For fallible construction with explicit error
    /// handling, use [`Client::try_new()`] instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitrot_client::Client;
    ///
    /// let client = Client::new();
    /// ```
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self::builder()
            .build()
            .expect("Failed to build client with the default configuration")
    }

    /// Create a new client with the default configuration (fallible version).
    ///
    /// This is the fallible version of [`Client::new()`] that returns a
    /// `Result` instead of panicking on error.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn try_new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> GitrotClientBuilder {
        GitrotClientBuilder::default()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::assemble(config, None)
    }

    /// Create a client configured from the environment.
    ///
    /// Reads `GITROT_API_URL`, `GITROT_API_PREFIX`, `GITROT_ENV`, and
    /// `GITROT_TIMEOUT`, falling back to defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment value is malformed or the HTTP
    /// client cannot be constructed.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    fn assemble(config: ClientConfig, catalog: Option<ModelCatalog>) -> Result<Self> {
        let api_prefix = config.effective_api_prefix().to_string();

        let base_url_string = config
            .base_url
            .unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());

        if base_url_string.trim().is_empty() {
            return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
        }

        let base_url: Url = base_url_string
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{}", e)))?;

        // Validate URL scheme
        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                    scheme
                )));
            }
        }

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("gitrot-client-rust/{}", crate::VERSION))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let inner = Arc::new(ClientInner {
            http_client,
            base_url,
            api_prefix,
            timeout: config.timeout,
            default_headers: config.default_headers,
            catalog: catalog.unwrap_or_default(),
            readmes: OnceLock::new(),
            auth: OnceLock::new(),
            health: OnceLock::new(),
        });

        Ok(Self { inner })
    }

    /// Access the model catalog backing this client.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use gitrot_client::Client;
    /// let client = Client::new();
    /// for provider in client.catalog().provider_options() {
    ///     println!("{} {}", provider.id, provider.label);
    /// }
    /// ```
    pub fn catalog(&self) -> &ModelCatalog {
        &self.inner.catalog
    }

    /// Access the README generation endpoint.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use gitrot_client::{Client, GenerateRequest};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new();
    /// let request = GenerateRequest::builder()
    ///     .repo_url("https://github.com/rust-lang/rust")
    ///     .provider_id("azure_openai")
    ///     .model_id("gpt-4o")
    ///     .build()?;
    /// let result = client.readmes().generate(&request).await;
    /// # Ok(())
    /// # }
    /// ```
    pub fn readmes(&self) -> &Readmes {
        self.inner
            .readmes
            .get_or_init(|| Readmes::new(self.clone()))
    }

    /// Access the authentication and user profile endpoints.
    pub fn auth(&self) -> &Auth {
        self.inner.auth.get_or_init(|| Auth::new(self.clone()))
    }

    /// Access the service health endpoint.
    pub fn health(&self) -> &Health {
        self.inner.health.get_or_init(|| Health::new(self.clone()))
    }

    /// Create a request builder for the given method and path.
    ///
    /// The configured API prefix is prepended to `path` before joining onto
    /// the base URL, and every request carries `content-type: application/json`
    /// unless a default header overrides it.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be constructed from the base URL and path.
    pub(crate) fn request(&self, method: http::Method, path: &str) -> Result<RequestBuilder> {
        let full_path = format!("{}{}", self.inner.api_prefix, path);
        let url = self.inner.base_url.join(&full_path).map_err(|e| {
            Error::InvalidUrl(format!(
                "Failed to construct URL from path '{}': {}",
                full_path, e
            ))
        })?;

        let mut builder = RequestBuilder::new(method, url)
            .with_client(self.inner.http_client.clone())
            .timeout(self.inner.timeout)
            .header(
                http::header::CONTENT_TYPE.as_str(),
                "application/json",
            );

        for (name, value) in self.inner.default_headers.iter() {
            if let Ok(value) = value.to_str() {
                builder = builder.header(name.as_str(), value);
            }
        }

        Ok(builder)
    }

    /// Get the base URL for the API
    #[allow(dead_code)]
    pub(crate) fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct GitrotClientBuilder {
    config: ClientConfig,
    catalog: Option<ModelCatalog>,
}

impl GitrotClientBuilder {
    /// Set the base URL for the backend.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the API prefix prepended to every request path.
    ///
    /// Overrides the prefix implied by the environment.
    pub fn api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.config.api_prefix = Some(api_prefix.into());
        self
    }

    /// Set the deployment environment the client targets.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Set the default timeout for requests.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to
    /// HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Replace the built-in model catalog.
    ///
    /// Useful when the backend serves a different model roster than the
    /// bundled one.
    pub fn catalog(mut self, catalog: ModelCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::assemble(self.config, self.catalog)
    }
}
