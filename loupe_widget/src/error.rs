// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A widget configuration value that cannot drive the engine.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `deltaScale` is zero, negative or not finite.
    #[error("delta scale must be a positive finite number, got {0}")]
    DeltaScale(f64),
    /// `pan` is zero, negative or not finite.
    #[error("pan step must be a positive finite number, got {0}")]
    PanStep(f64),
    /// `panDamping` is zero, negative or not finite.
    #[error("pan damping must be a positive finite number, got {0}")]
    PanDamping(f64),
}

/// Failures reported by widget operations.
///
/// None of these are fatal; gesture handlers log them and carry on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// No url is configured and the container carries no source attribute.
    #[error("no full-resolution image source configured or found on the container")]
    MissingSource,
    /// `destroy` was called on a widget built without destroy support.
    #[error("this widget was configured without destroy support")]
    DestroyUnsupported,
    /// The widget has already been torn down.
    #[error("the widget has already been destroyed")]
    Detached,
}
