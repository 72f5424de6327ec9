// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_widgets::WidgetError;

/// Errors raised while constructing a controller or registering with it.
///
/// Per-event handling never fails; these only come out of construction,
/// widget registration and key-binding setup.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// The surface reported a size that cannot be drawn into.
    #[error("surface size {width}x{height} is not a usable drawing surface")]
    NotASurface {
        /// Reported width.
        width: f64,
        /// Reported height.
        height: f64,
    },
    /// An option needed more numbers than it was given, or got a NaN.
    #[error("option `{field}` needs at least {min_len} numeric values")]
    NotNumericArray {
        /// Name of the offending option.
        field: &'static str,
        /// Number of values the option requires.
        min_len: usize,
    },
    /// Widget creation or registration failed.
    #[error(transparent)]
    Widget(#[from] WidgetError),
    /// Arrow keys can only be bound on a key binding owned by a controller.
    #[error("key binding is not attached to a controller")]
    NotManagedSurface,
}

/// Result alias for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
