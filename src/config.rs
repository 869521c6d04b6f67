use serde::Deserialize;

pub const DEFAULT_ANNUAL_INTEREST_PERCENT: f64 = 20.0;

/// Environment configuration.
///
/// The upstream base URLs are deliberately optional at startup: their
/// absence is a per-request config error (HTTP 500), not a boot failure,
/// so the service always comes up and stays probeable.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub salary_api_url: Option<String>,
    pub credit_api_url: Option<String>,
    pub annual_interest_percent: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            salary_api_url: std::env::var("SALARY_API_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            credit_api_url: std::env::var("CREDIT_API_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            annual_interest_percent: std::env::var("ANNUAL_INTEREST_PERCENT")
                .ok()
                .map(|v| parse_interest(&v))
                .unwrap_or(DEFAULT_ANNUAL_INTEREST_PERCENT),
        };

        tracing::info!("Configuration loaded successfully");
        if let Some(ref url) = config.salary_api_url {
            tracing::debug!("Salary API URL: {}", url);
        } else {
            tracing::warn!("SALARY_API_URL not set; loan applications will fail until configured");
        }
        if let Some(ref url) = config.credit_api_url {
            tracing::debug!("Credit API URL: {}", url);
        } else {
            tracing::warn!("CREDIT_API_URL not set; loan applications will fail until configured");
        }
        tracing::debug!("Annual interest: {}%", config.annual_interest_percent);
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }
}

fn parse_interest(raw: &str) -> f64 {
    match raw.parse::<f64>() {
        Ok(rate) => rate,
        Err(_) => {
            tracing::warn!(
                "ANNUAL_INTEREST_PERCENT '{}' is not a valid number, using default {}",
                raw,
                DEFAULT_ANNUAL_INTEREST_PERCENT
            );
            DEFAULT_ANNUAL_INTEREST_PERCENT
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_parses_valid_floats() {
        assert_eq!(parse_interest("12.5"), 12.5);
        assert_eq!(parse_interest("0"), 0.0);
    }

    #[test]
    fn interest_falls_back_on_garbage() {
        assert_eq!(parse_interest("twenty"), DEFAULT_ANNUAL_INTEREST_PERCENT);
        assert_eq!(parse_interest(""), DEFAULT_ANNUAL_INTEREST_PERCENT);
    }
}
