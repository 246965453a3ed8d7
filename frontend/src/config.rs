use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::FunnelError;
use crate::widgets::Countdown;

const EMBEDDED_CONFIG: &str = include_str!("../funnel.json");

const DEFAULT_CHECKOUT_URL: &str = "https://pay.cakto.com.br/34ajqm9_394962";

/// Browser timers take a signed 32-bit millisecond delay; anything longer
/// wraps negative and fires immediately.
const MAX_TIMER_SECS: u32 = i32::MAX as u32 / 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackingConfig {
    pub enabled: bool,
    pub pixel_id: String,
    pub pixel_script_url: String,
    pub utms_script_url: String,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pixel_id: "682bff3139790ab4dfd8b658".to_string(),
            pixel_script_url: "https://cdn.utmify.com.br/scripts/pixel/pixel.js".to_string(),
            utms_script_url: "https://cdn.utmify.com.br/scripts/utms/latest.js".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FunnelConfig {
    pub checkout_url: String,
    pub countdown_start: Countdown,
    pub spots_start: u32,
    pub spots_interval_secs: u32,
    pub notification_period_secs: u32,
    pub notification_display_secs: u32,
    pub video_embed_url: String,
    pub tracking: TrackingConfig,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            checkout_url: DEFAULT_CHECKOUT_URL.to_string(),
            countdown_start: Countdown::new(0, 11, 45, 19),
            spots_start: 37,
            spots_interval_secs: 300,
            notification_period_secs: 45,
            notification_display_secs: 5,
            video_embed_url:
                "https://www.youtube.com/embed/RK9kW5xaugU?rel=0&showinfo=0&modestbranding=1"
                    .to_string(),
            tracking: TrackingConfig::default(),
        }
    }
}

impl FunnelConfig {
    pub fn from_json(raw: &str) -> Result<Self, FunnelError> {
        let config: FunnelConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FunnelError> {
        if !self.checkout_url.starts_with("https://") {
            return Err(FunnelError::InvalidConfig(format!(
                "checkout_url must be an https URL, got {:?}",
                self.checkout_url
            )));
        }
        if !self.countdown_start.is_well_formed() {
            return Err(FunnelError::InvalidConfig(format!(
                "countdown_start out of range: {:?}",
                self.countdown_start
            )));
        }
        if self.spots_start < 1 {
            return Err(FunnelError::InvalidConfig(
                "spots_start must be at least 1".to_string(),
            ));
        }
        if self.spots_interval_secs == 0
            || self.notification_period_secs == 0
            || self.notification_display_secs == 0
        {
            return Err(FunnelError::InvalidConfig(
                "timer periods must be greater than zero".to_string(),
            ));
        }
        for (name, secs) in [
            ("spots_interval_secs", self.spots_interval_secs),
            ("notification_period_secs", self.notification_period_secs),
            ("notification_display_secs", self.notification_display_secs),
        ] {
            if secs > MAX_TIMER_SECS {
                return Err(FunnelError::InvalidConfig(format!(
                    "{} ({}) exceeds the browser timer limit of {} seconds",
                    name, secs, MAX_TIMER_SECS
                )));
            }
        }
        if self.notification_display_secs >= self.notification_period_secs {
            return Err(FunnelError::InvalidConfig(format!(
                "notification_display_secs ({}) must be shorter than notification_period_secs ({})",
                self.notification_display_secs, self.notification_period_secs
            )));
        }
        Ok(())
    }

    pub fn spots_interval_ms(&self) -> u32 {
        self.spots_interval_secs.saturating_mul(1000)
    }

    pub fn notification_period_ms(&self) -> u32 {
        self.notification_period_secs.saturating_mul(1000)
    }

    pub fn notification_display_ms(&self) -> u32 {
        self.notification_display_secs.saturating_mul(1000)
    }
}

fn load(raw: &str, checkout_override: Option<&str>) -> FunnelConfig {
    let mut config = match FunnelConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; falling back to built-in defaults", e);
            FunnelConfig::default()
        }
    };
    if let Some(url) = checkout_override.filter(|u| u.starts_with("https://")) {
        config.checkout_url = url.to_string();
    }
    config
}

static CONFIG: Lazy<FunnelConfig> =
    Lazy::new(|| load(EMBEDDED_CONFIG, option_env!("FUNNEL_CHECKOUT_URL")));

pub fn get() -> &'static FunnelConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = FunnelConfig::from_json(EMBEDDED_CONFIG).expect("embedded config");
        assert_eq!(config.countdown_start, Countdown::new(0, 11, 45, 19));
        assert_eq!(config.spots_start, 37);
        assert_eq!(config.spots_interval_ms(), 300_000);
        assert_eq!(config.notification_period_ms(), 45_000);
        assert_eq!(config.notification_display_ms(), 5_000);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(FunnelConfig::default().validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = FunnelConfig::from_json(r#"{"spots_start": 12}"#).expect("partial config");
        assert_eq!(config.spots_start, 12);
        assert_eq!(config.checkout_url, DEFAULT_CHECKOUT_URL);
        assert!(config.tracking.enabled);
    }

    #[test]
    fn rejects_display_longer_than_period() {
        let err = FunnelConfig::from_json(
            r#"{"notification_period_secs": 5, "notification_display_secs": 5}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FunnelError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_period_beyond_timer_range() {
        let err = FunnelConfig::from_json(
            r#"{"spots_interval_secs": 3000000, "notification_period_secs": 5000000}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FunnelError::InvalidConfig(_)));

        let at_limit = FunnelConfig::from_json(&format!(
            r#"{{"spots_interval_secs": {}}}"#,
            MAX_TIMER_SECS
        ))
        .expect("limit is accepted");
        assert!(at_limit.spots_interval_ms() <= i32::MAX as u32);

        let past_limit = format!(r#"{{"spots_interval_secs": {}}}"#, MAX_TIMER_SECS + 1);
        assert!(FunnelConfig::from_json(&past_limit).is_err());
        assert_eq!(load(&past_limit, None), FunnelConfig::default());
    }

    #[test]
    fn rejects_out_of_range_countdown() {
        let err = FunnelConfig::from_json(
            r#"{"countdown_start": {"days": 0, "hours": 24, "minutes": 0, "seconds": 0}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, FunnelError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_spots_and_plain_http() {
        assert!(FunnelConfig::from_json(r#"{"spots_start": 0}"#).is_err());
        assert!(FunnelConfig::from_json(r#"{"checkout_url": "http://example.com"}"#).is_err());
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        assert!(matches!(
            FunnelConfig::from_json("{not json"),
            Err(FunnelError::ConfigParse(_))
        ));
        assert_eq!(load("{not json", None), FunnelConfig::default());
    }

    #[test]
    fn checkout_override_applies_only_to_https() {
        let config = load(EMBEDDED_CONFIG, Some("https://checkout.example/abc"));
        assert_eq!(config.checkout_url, "https://checkout.example/abc");

        let config = load(EMBEDDED_CONFIG, Some("javascript:alert(1)"));
        assert_eq!(config.checkout_url, DEFAULT_CHECKOUT_URL);
    }
}
