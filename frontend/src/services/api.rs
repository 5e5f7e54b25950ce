use gloo::net::http::Request;
use shared::BalancesResource;

/// Resource path consumed exactly once per page load.
const BALANCES_PATH: &str = "/account-balances.json";

/// API client for fetching the balances resource.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client that fetches from the page's own origin.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch and parse the account balances time series.
    pub async fn get_balances(&self) -> Result<BalancesResource, String> {
        let url = format!("{}{}", self.base_url, BALANCES_PATH);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<BalancesResource>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse balances: {}", e)),
                    }
                } else {
                    Err(format!("Server error {}", response.status()))
                }
            }
            Err(e) => Err(format!("Failed to fetch balances: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
