use std::env;

const HOSTED_CONNECT_BASE: &str = "https://connect.simplecheckout.ai";
const SANDBOX_PUBLISHABLE_KEY: &str = "pk_sandbox_YOUR_KEY_HERE";
const SANDBOX_CUSTOMER_ID: &str = "your-customer-uuid";
const SANDBOX_LOGIN_SOURCE_ID: &str = "your-login-source-uuid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectConfig {
    pub connect_url: String,
    pub publishable_key: String,
    pub customer_id: String,
    pub login_source_id: String,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            connect_url: HOSTED_CONNECT_BASE.to_string(),
            publishable_key: SANDBOX_PUBLISHABLE_KEY.to_string(),
            customer_id: SANDBOX_CUSTOMER_ID.to_string(),
            login_source_id: SANDBOX_LOGIN_SOURCE_ID.to_string(),
        }
    }
}

impl ConnectConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            connect_url: env_or("CONNECT_URL", defaults.connect_url),
            publishable_key: env_or("CONNECT_PUBLISHABLE_KEY", defaults.publishable_key),
            customer_id: env_or("CONNECT_CUSTOMER_ID", defaults.customer_id),
            login_source_id: env_or("CONNECT_LOGIN_SOURCE_ID", defaults.login_source_id),
        }
    }

    pub fn hosted_connect_url(&self) -> String {
        format!(
            "{}?publishable_key={}&customer_id={}&login_source_id={}",
            self.connect_url, self.publishable_key, self.customer_id, self.login_source_id
        )
    }
}

fn env_or(name: &str, default: String) -> String {
    env::var(name).ok().filter(|value| !value.is_empty()).unwrap_or(default)
}
