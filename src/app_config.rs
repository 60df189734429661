use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    tracking: Tracking,
    geocoder: Geocoder,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("tracking.force_continuous", false)?
            .set_default("tracking.retain_last_known", true)?
            .set_default("tracking.verbose_status", false)?
            .set_default("geocoder.base_url", "https://maps.googleapis.com/maps/api")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn tracking(&self) -> &Tracking {
        &self.tracking
    }

    pub fn geocoder(&self) -> &Geocoder {
        &self.geocoder
    }
}

#[derive(Debug, Deserialize)]
pub struct Tracking {
    force_continuous: bool,
    retain_last_known: bool,
    verbose_status: bool,
}

impl Tracking {
    pub fn force_continuous(&self) -> bool {
        self.force_continuous
    }

    pub fn retain_last_known(&self) -> bool {
        self.retain_last_known
    }

    pub fn verbose_status(&self) -> bool {
        self.verbose_status
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoder {
    base_url: String,
}

impl Geocoder {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                tracking: Tracking {
                    force_continuous: false,
                    retain_last_known: true,
                    verbose_status: false,
                },
                geocoder: Geocoder {
                    base_url: "https://geocoder.url".to_string(),
                },
            },
        }
    }

    pub fn geocoder_base_url(mut self, url: String) -> Self {
        self.config.geocoder.base_url = url;
        self
    }

    pub fn force_continuous(mut self, value: bool) -> Self {
        self.config.tracking.force_continuous = value;
        self
    }

    pub fn retain_last_known(mut self, value: bool) -> Self {
        self.config.tracking.retain_last_known = value;
        self
    }

    pub fn verbose_status(mut self, value: bool) -> Self {
        self.config.tracking.verbose_status = value;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
