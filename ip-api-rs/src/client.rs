use crate::catalog;
use crate::errors::IpApiError;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::types::{Config, LocationResult, DEFAULT_LANG};
use reqwest::{Method, Request, Url};
use serde::de::Error as _;
use serde_json::Value;
use std::net::IpAddr;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{debug, error, instrument};

#[derive(Clone)]
pub struct IpApi {
    config: Config,
    transport: Arc<dyn HttpTransport>,
}

impl IpApi {
    /// Free tier client backed by a default reqwest client. An empty `lang`
    /// falls back to `"en"`.
    pub fn init(lang: &str) -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::default()), lang)
    }

    pub fn with_transport(transport: Arc<dyn HttpTransport>, lang: &str) -> Self {
        Self::with_config(Config::with_lang(lang), transport)
    }

    pub fn with_config(config: Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switches subsequent lookups to the pro endpoint with `api_key`.
    pub fn use_pro(&mut self, api_key: impl Into<String>) {
        self.config.use_pro(api_key);
    }

    /// Parses `ip` and looks it up. Unparseable input fails with
    /// [`IpApiError::InvalidIpAddress`] before any request is made.
    pub async fn fetch_location(&self, ip: &str) -> Result<LocationResult, IpApiError> {
        let ip: IpAddr = ip
            .parse()
            .map_err(|_| IpApiError::InvalidIpAddress(ip.to_string()))?;
        self.fetch_ip_location(ip).await
    }

    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(tier = ?self.config.tier())))]
    pub async fn fetch_ip_location(&self, ip: IpAddr) -> Result<LocationResult, IpApiError> {
        let request = self.build_request(ip)?;

        let res = self
            .transport
            .execute(request)
            .await
            .map_err(IpApiError::Transport)?;

        if !res.status.is_success() {
            let body = String::from_utf8_lossy(&res.body).into_owned();
            #[cfg(feature = "tracing")]
            error!(status = ?res.status, body = %body, "ip-api returned error");
            return Err(IpApiError::ApiError {
                status: res.status,
                body,
            });
        }

        let value: Value = serde_json::from_slice(&res.body)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("expected a JSON object").into());
        }
        let location: LocationResult = serde_json::from_value(value)?;
        classify(location)
    }

    fn build_request(&self, ip: IpAddr) -> Result<Request, IpApiError> {
        let mut url = Url::parse(&self.config.base_url)?.join(&format!("/json/{ip}"))?;

        let mut params = Vec::new();
        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            params.push(("key", key));
        }
        if self.config.lang != DEFAULT_LANG {
            params.push(("lang", self.config.lang.as_str()));
        }
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        Ok(Request::new(Method::GET, url))
    }
}

fn classify(location: LocationResult) -> Result<LocationResult, IpApiError> {
    if let Some(failure) = catalog::lookup(&location.message) {
        #[cfg(feature = "tracing")]
        debug!(message = %location.message, "ip-api reported a known failure");
        return Err(failure.into());
    }

    match location.status.as_str() {
        "success" => Ok(location),
        "fail" => Err(IpApiError::UnrecognizedServiceFailure(location.message)),
        other => Err(serde_json::Error::custom(format!("unexpected status {other:?}")).into()),
    }
}
