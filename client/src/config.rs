use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const RUN_PATH: &str = "/hackrx/run";

/// Settings loaded once at startup and handed to the controller.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub bind_addr: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl FrontendConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("FRONTEND_API_URL").unwrap_or_else(|| {
            log::info!("FRONTEND_API_URL not set, using default: {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        });

        let api_key = lookup("HACKATHON_API_KEY").filter(|key| !key.is_empty());
        if api_key.is_none() {
            log::warn!("HACKATHON_API_KEY not set; submissions will be rejected");
        }

        let timeout = match lookup("FRONTEND_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e| {
                    anyhow::anyhow!("Invalid FRONTEND_TIMEOUT_SECS value {:?}: {}", raw, e)
                })?;
                if secs == 0 {
                    return Err(anyhow::anyhow!("FRONTEND_TIMEOUT_SECS must be greater than zero"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let bind_addr = lookup("FRONTEND_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            api_url,
            api_key,
            timeout,
            bind_addr,
        })
    }

    pub fn run_url(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), RUN_PATH)
    }
}
