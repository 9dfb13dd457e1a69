use serde::Deserialize;

use filterforge_core::error::{FilterForgeError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    /// Inputs for the certificate-issuance collaborator (allowed host names,
    /// contact email). Constructed once at startup and never mutated.
    #[serde(default)]
    pub acme: Option<AcmeConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FilterForgeError::BadRequest(
                "unsupported config version".into(),
            ));
        }

        self.gateway.validate()?;

        if let Some(acme) = &self.acme {
            acme.validate()?;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Upper bound on the filter expression, checked before compilation.
    #[serde(default = "default_max_expression_bytes")]
    pub max_expression_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_expression_bytes: default_max_expression_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=65536).contains(&self.max_expression_bytes) {
            return Err(FilterForgeError::BadRequest(
                "gateway.max_expression_bytes must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_max_expression_bytes() -> usize {
    4096
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AcmeConfig {
    pub hostnames: Vec<String>,
    pub contact: String,
}

impl AcmeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.hostnames.is_empty() {
            return Err(FilterForgeError::BadRequest(
                "acme.hostnames must not be empty".into(),
            ));
        }
        if self.hostnames.iter().any(|h| h.is_empty()) {
            return Err(FilterForgeError::BadRequest(
                "acme.hostnames entries must not be empty".into(),
            ));
        }
        if !self.contact.contains('@') {
            return Err(FilterForgeError::BadRequest(
                "acme.contact must be an email address".into(),
            ));
        }
        Ok(())
    }
}
