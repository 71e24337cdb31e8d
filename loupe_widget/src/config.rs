// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use loupe_gesture::Recognizers;
use loupe_view::TransformEngine;

use crate::error::ConfigError;

/// Options for a [`ZoomWidget`](crate::ZoomWidget).
///
/// A plain value handed to the widget at construction. Every widget owns
/// its copy; there is no shared default object that construction could
/// mutate.
///
/// With the `serde` feature this deserializes from a camelCase option
/// object, and any missing field takes its default:
///
/// ```json
/// { "lazyLoad": false, "deltaScale": 0.04, "pan": 12, "url": "/img/full.jpg" }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ZoomConfig {
    /// Defer the full-resolution fetch until the first interaction.
    pub lazy_load: bool,
    /// Scale increment per pinch tick.
    pub delta_scale: f64,
    /// Pixels moved by one directional swipe.
    #[cfg_attr(feature = "serde", serde(rename = "pan", alias = "panDelta"))]
    pub pan_step: f64,
    /// Divisor applied to continuous drag deltas.
    pub pan_damping: f64,
    /// Explicit full-resolution image url. When absent or empty the
    /// container's `data-zoom-src` attribute is used.
    #[cfg_attr(feature = "serde", serde(alias = "source"))]
    pub url: Option<String>,
    /// Honor [`ZoomWidget::destroy`](crate::ZoomWidget::destroy).
    pub supports_destroy: bool,
    /// Subscribe to discrete up/down/left/right swipes.
    pub directional_pan_events: bool,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            lazy_load: true,
            delta_scale: TransformEngine::DEFAULT_DELTA_SCALE,
            pan_step: 10.0,
            pan_damping: 3.0,
            url: None,
            supports_destroy: true,
            directional_pan_events: false,
        }
    }
}

impl ZoomConfig {
    /// Checks that every numeric option is positive and finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.delta_scale) {
            return Err(ConfigError::DeltaScale(self.delta_scale));
        }
        if !is_positive(self.pan_step) {
            return Err(ConfigError::PanStep(self.pan_step));
        }
        if !is_positive(self.pan_damping) {
            return Err(ConfigError::PanDamping(self.pan_damping));
        }
        Ok(())
    }

    /// Recognizers the widget subscribes to with these options.
    #[must_use]
    pub fn recognizers(&self) -> Recognizers {
        let mut recognizers = Recognizers::ZOOM;
        if self.lazy_load {
            recognizers |= Recognizers::TAP;
        }
        if self.directional_pan_events {
            recognizers |= Recognizers::DIRECTIONAL_PAN;
        }
        recognizers
    }
}

/// Options for a [`MagnifyWidget`](crate::MagnifyWidget).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "camelCase")
)]
pub struct MagnifyConfig {
    /// Explicit full-resolution image url. When absent or empty the
    /// thumbnail's `data-magnify-source` attribute is used.
    #[cfg_attr(feature = "serde", serde(alias = "url"))]
    pub source: Option<String>,
    /// Treat touch start/move/end like mouse enter/move/leave.
    pub touch_support: bool,
}

impl Default for MagnifyConfig {
    fn default() -> Self {
        Self {
            source: None,
            touch_support: true,
        }
    }
}

impl MagnifyConfig {
    /// Recognizers the widget subscribes to with these options.
    #[must_use]
    pub fn recognizers(&self) -> Recognizers {
        if self.touch_support {
            Recognizers::MOUSE_HOVER | Recognizers::TOUCH_HOVER
        } else {
            Recognizers::MOUSE_HOVER
        }
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use loupe_gesture::Recognizers;

    use super::{MagnifyConfig, ZoomConfig};
    use crate::error::ConfigError;

    #[test]
    fn defaults_match_the_documented_options() {
        let config = ZoomConfig::default();
        assert!(config.lazy_load);
        assert_eq!(config.delta_scale, 0.05);
        assert_eq!(config.pan_step, 10.0);
        assert_eq!(config.pan_damping, 3.0);
        assert_eq!(config.url, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        let config = ZoomConfig {
            delta_scale: 0.0,
            ..ZoomConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DeltaScale(0.0)));

        let config = ZoomConfig {
            pan_step: -1.0,
            ..ZoomConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PanStep(-1.0)));

        let config = ZoomConfig {
            pan_damping: f64::INFINITY,
            ..ZoomConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PanDamping(f64::INFINITY)));
    }

    #[test]
    fn recognizers_follow_options() {
        let lazy = ZoomConfig::default();
        assert!(lazy.recognizers().contains(Recognizers::TAP));
        assert!(!lazy.recognizers().contains(Recognizers::DIRECTIONAL_PAN));

        let eager = ZoomConfig {
            lazy_load: false,
            directional_pan_events: true,
            ..ZoomConfig::default()
        };
        assert_eq!(
            eager.recognizers(),
            Recognizers::ZOOM | Recognizers::DIRECTIONAL_PAN
        );

        let mouse_only = MagnifyConfig {
            touch_support: false,
            ..MagnifyConfig::default()
        };
        assert_eq!(mouse_only.recognizers(), Recognizers::MOUSE_HOVER);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_parse_from_camel_case() {
        let config: ZoomConfig = serde_json::from_str(
            r#"{ "lazyLoad": false, "deltaScale": 0.04, "panDelta": 12, "source": "/full.jpg" }"#,
        )
        .unwrap();
        assert!(!config.lazy_load);
        assert_eq!(config.delta_scale, 0.04);
        assert_eq!(config.pan_step, 12.0);
        assert_eq!(config.url.as_deref(), Some("/full.jpg"));
        assert_eq!(config.pan_damping, 3.0);
        assert!(config.supports_destroy);

        let config: ZoomConfig = serde_json::from_str(r#"{ "pan": 5, "url": null }"#).unwrap();
        assert_eq!(config.pan_step, 5.0);
        assert_eq!(config.url, None);

        let magnify: MagnifyConfig =
            serde_json::from_str(r#"{ "touchSupport": false }"#).unwrap();
        assert!(!magnify.touch_support);
        assert_eq!(magnify.source, None);
    }
}
