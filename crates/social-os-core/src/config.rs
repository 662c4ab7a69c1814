//! Configuration module
//!
//! Configuration is read from the environment once at startup and then passed
//! into each component as an immutable value. Missing AI or Graph API
//! credentials are not startup errors: they surface per request as
//! `AppError::Config`.

use std::env;

// Common constants
const SERVER_PORT: u16 = 8000;
const MAX_FILE_SIZE_MB: usize = 10;
const GEMINI_TIMEOUT_SECS: u64 = 60;
const GRAPH_TIMEOUT_SECS: u64 = 45;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GRAPH_API_BASE: &str = "https://graph.facebook.com";
const DEFAULT_GRAPH_API_VERSION: &str = "v21.0";

/// Server-level configuration
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Per-brand Instagram Business account ids.
#[derive(Clone, Debug, Default)]
pub struct BrandAccounts {
    pub dravidian: Option<String>,
    pub fire_and_ice: Option<String>,
    pub barley_and_hops: Option<String>,
    pub score_bar: Option<String>,
    pub southern_spice: Option<String>,
}

impl BrandAccounts {
    /// Pick the brand-specific account by keyword match on the brand name.
    ///
    /// Returns `None` when no keyword matches or the matched brand has no
    /// account configured; callers then fall back to the default account.
    pub fn for_brand(&self, brand: &str) -> Option<&str> {
        let normalized = brand.to_lowercase();
        // "spice" contains "ice", so Southern Spice is matched before Fire & Ice.
        let account = if normalized.contains("dravidian") {
            &self.dravidian
        } else if normalized.contains("southern") || normalized.contains("spice") {
            &self.southern_spice
        } else if normalized.contains("fire") || normalized.contains("ice") {
            &self.fire_and_ice
        } else if normalized.contains("barley") || normalized.contains("hops") {
            &self.barley_and_hops
        } else if normalized.contains("score") {
            &self.score_bar
        } else {
            return None;
        };
        account.as_deref()
    }
}

/// Full service configuration
#[derive(Clone, Debug)]
pub struct SocialConfig {
    pub base: BaseConfig,
    // Blob store
    pub upload_dir: String,
    pub public_base_url: Option<String>,
    pub max_file_size_bytes: usize,
    // AI inference
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub gemini_timeout_secs: u64,
    // Graph API publishing
    pub meta_access_token: Option<String>,
    pub instagram_business_account_id: Option<String>,
    pub brand_accounts: BrandAccounts,
    pub graph_api_base: String,
    pub graph_api_version: String,
    pub graph_timeout_secs: u64,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<SocialConfig>);

impl Config {
    fn as_social(&self) -> &SocialConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_env(&self.as_social().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = SocialConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_social().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.as_social().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_social().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_social().base.environment
    }

    pub fn upload_dir(&self) -> &str {
        &self.as_social().upload_dir
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.as_social().public_base_url.as_deref()
    }

    pub fn max_file_size_bytes(&self) -> usize {
        self.as_social().max_file_size_bytes
    }

    pub fn gemini_api_key(&self) -> Option<&str> {
        self.as_social().gemini_api_key.as_deref()
    }

    pub fn gemini_model(&self) -> &str {
        &self.as_social().gemini_model
    }

    pub fn gemini_api_base(&self) -> &str {
        &self.as_social().gemini_api_base
    }

    pub fn gemini_timeout_secs(&self) -> u64 {
        self.as_social().gemini_timeout_secs
    }

    pub fn meta_access_token(&self) -> Option<&str> {
        self.as_social().meta_access_token.as_deref()
    }

    pub fn instagram_business_account_id(&self) -> Option<&str> {
        self.as_social().instagram_business_account_id.as_deref()
    }

    /// Resolve the publishing account for a brand, falling back to the
    /// default Instagram Business account.
    pub fn instagram_account_for(&self, brand: Option<&str>) -> Option<&str> {
        brand
            .and_then(|b| self.as_social().brand_accounts.for_brand(b))
            .or_else(|| self.instagram_business_account_id())
    }

    pub fn graph_api_base(&self) -> &str {
        &self.as_social().graph_api_base
    }

    pub fn graph_api_version(&self) -> &str {
        &self.as_social().graph_api_version
    }

    pub fn graph_timeout_secs(&self) -> u64 {
        self.as_social().graph_timeout_secs
    }
}

fn is_production_env(environment: &str) -> bool {
    let env = environment.to_lowercase();
    env == "production" || env == "prod"
}

/// Treat unset and blank variables the same way.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl SocialConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server_port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => SERVER_PORT,
        };

        let max_file_size_mb = var("MAX_FILE_SIZE_MB")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(MAX_FILE_SIZE_MB);

        let config = SocialConfig {
            base: BaseConfig {
                server_port,
                cors_origins,
                environment,
            },
            upload_dir: non_empty(var("UPLOAD_DIR"))
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            public_base_url: non_empty(var("PUBLIC_BASE_URL"))
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            gemini_api_key: non_empty(var("GEMINI_API_KEY")),
            gemini_model: non_empty(var("GEMINI_MODEL"))
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: non_empty(var("GEMINI_API_BASE"))
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            gemini_timeout_secs: var("GEMINI_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(GEMINI_TIMEOUT_SECS),
            meta_access_token: non_empty(var("META_ACCESS_TOKEN")),
            instagram_business_account_id: non_empty(var("INSTAGRAM_BUSINESS_ACCOUNT_ID")),
            brand_accounts: BrandAccounts {
                dravidian: non_empty(var("DRAVIDIAN_IG_ID")),
                fire_and_ice: non_empty(var("FIREANDICE_IG_ID")),
                barley_and_hops: non_empty(var("BARLEYHOPS_IG_ID")),
                score_bar: non_empty(var("SCOREBAR_IG_ID")),
                southern_spice: non_empty(var("SOUTHERNSPICE_IG_ID")),
            },
            graph_api_base: non_empty(var("GRAPH_API_BASE"))
                .unwrap_or_else(|| DEFAULT_GRAPH_API_BASE.to_string()),
            graph_api_version: non_empty(var("GRAPH_API_VERSION"))
                .unwrap_or_else(|| DEFAULT_GRAPH_API_VERSION.to_string()),
            graph_timeout_secs: var("GRAPH_TIMEOUT_SECS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(GRAPH_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if is_production_env(&self.base.environment)
            && self.base.cors_origins.iter().any(|o| o == "*")
        {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if let Some(url) = &self.public_base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(anyhow::anyhow!(
                    "PUBLIC_BASE_URL must start with http:// or https://"
                ));
            }
        }

        if self.gemini_timeout_secs == 0 || self.graph_timeout_secs == 0 {
            return Err(anyhow::anyhow!(
                "GEMINI_TIMEOUT_SECS and GRAPH_TIMEOUT_SECS must be greater than zero"
            ));
        }

        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be greater than zero"));
        }

        Ok(())
    }
}
