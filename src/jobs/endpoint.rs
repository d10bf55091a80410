use std::collections::BTreeMap;

use url::Url;

use crate::args::Protocol;
use crate::error::ValidationError;

/// Target composed as `protocol://host:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub protocol: Protocol,
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    #[must_use]
    pub fn base(&self) -> String {
        format!("{}://{}:{}", self.protocol.as_str(), self.host, self.port)
    }

    /// Parses the endpoint into a request URL.
    ///
    /// # Errors
    ///
    /// Returns an error when host and port do not form a valid URL.
    pub fn url(&self) -> Result<Url, ValidationError> {
        let base = self.base();
        Url::parse(&base).map_err(|err| ValidationError::InvalidEndpoint {
            url: base,
            source: err,
        })
    }

    /// Variables available to job templates.
    #[must_use]
    pub fn template_vars(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("HOST", self.host.clone()),
            ("PORT", self.port.to_string()),
            ("PROT", self.protocol.as_str().to_owned()),
        ])
    }
}
