// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller options and their validated form.
//!
//! [`ControllerOptions`] is the loose, host-facing shape: plain numbers and
//! number lists with documented defaults, deserializable with the `serde`
//! feature. [`ControllerConfig::from_options`] validates it into kurbo types.

use alloc::vec;
use alloc::vec::Vec;

use easel_view::{DEFAULT_SCALE_BOUNDS, Speed, UNBOUNDED};
use easel_widgets::DispatchOrder;
use kurbo::{Point, Rect, Size, Vec2};

use crate::adapters::DeviceClass;
use crate::error::{Error, Result};
use crate::event::Buttons;
use crate::wheel::DEFAULT_PIXELS_PER_LINE;

/// Default upper bound on press duration for a click, in milliseconds.
pub const DEFAULT_CLICK_SENSITIVITY_MS: u64 = 800;

/// Default distance a touch must travel before it counts as moved, in pixels.
pub const DEFAULT_TOUCH_SENSITIVITY: f64 = 1.0;

/// Which pointer buttons start a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ButtonPolicy {
    /// Primary button only.
    #[default]
    Left = 1,
    /// Secondary button only.
    Right = 2,
    /// Primary or secondary.
    Both = 3,
    /// Middle button only.
    Wheel = 4,
    /// Any button.
    All = 7,
}

impl ButtonPolicy {
    /// The buttons this policy accepts.
    #[must_use]
    pub fn buttons(self) -> Buttons {
        Buttons::from_bits_truncate(self as u8)
    }

    /// Returns `true` if any held button is accepted.
    #[must_use]
    pub fn accepts(self, held: Buttons) -> bool {
        self.buttons().intersects(held)
    }
}

/// How pinch gestures map onto the two scale axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleMode {
    /// Both axes follow the distance between the fingers.
    #[default]
    Normal = 1,
    /// Each axis follows the finger separation along that axis.
    FreeScale = 2,
}

/// Host-facing controller options.
///
/// Number lists follow the `[x, y]` and `[min_x, min_y, max_x, max_y]`
/// conventions; extra values are ignored.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ControllerOptions {
    /// Initial pan offset `[x, y]`.
    pub translation: Vec<f64>,
    /// Initial zoom `[x, y]`; both must be positive.
    pub scale: Vec<f64>,
    /// Anchor for [`Controller::zoom_about_pin`](crate::Controller::zoom_about_pin);
    /// the surface centre when absent.
    pub pin: Option<Vec<f64>>,
    /// Pan limits `[min_x, min_y, max_x, max_y]`.
    pub translation_bounds: Vec<f64>,
    /// Zoom limits `[min_x, min_y, max_x, max_y]`.
    pub scale_bounds: Vec<f64>,
    /// Pan with a pressed pointer or a single finger.
    pub drag_enabled: bool,
    /// Zoom with two fingers.
    pub pinch_enabled: bool,
    /// Zoom with the wheel.
    pub wheel_enabled: bool,
    /// Pan with the arrow keys.
    pub keys_enabled: bool,
    /// Invert pan and zoom input.
    pub events_reversed: bool,
    /// Scale pan limits with the current zoom.
    pub dynamic_translation_bounds: bool,
    /// Multiplier for pan deltas.
    pub translate_speed: f64,
    /// Multiplier for zoom deltas.
    pub scale_speed: f64,
    /// Pixels a touch must travel before a pinch sees it as moved.
    pub touch_sensitivity: f64,
    /// Longest press, in milliseconds, that still counts as a click.
    pub click_sensitivity: u64,
    /// Buttons that start a drag.
    pub use_button: ButtonPolicy,
    /// Pinch zoom mode.
    pub scale_mode: ScaleMode,
    /// Primary input device.
    pub device_class: DeviceClass,
    /// Pixels per line for line-based wheel deltas.
    pub pixels_per_line: f64,
    /// Widget dispatch priority.
    pub dispatch_order: DispatchOrder,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            translation: vec![0.0, 0.0],
            scale: vec![1.0, 1.0],
            pin: None,
            translation_bounds: rect_values(UNBOUNDED),
            scale_bounds: rect_values(DEFAULT_SCALE_BOUNDS),
            drag_enabled: true,
            pinch_enabled: true,
            wheel_enabled: true,
            keys_enabled: false,
            events_reversed: false,
            dynamic_translation_bounds: false,
            translate_speed: 1.0,
            scale_speed: 1.0,
            touch_sensitivity: DEFAULT_TOUCH_SENSITIVITY,
            click_sensitivity: DEFAULT_CLICK_SENSITIVITY_MS,
            use_button: ButtonPolicy::default(),
            scale_mode: ScaleMode::default(),
            device_class: DeviceClass::default(),
            pixels_per_line: DEFAULT_PIXELS_PER_LINE,
            dispatch_order: DispatchOrder::default(),
        }
    }
}

/// Validated controller configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Initial pan offset.
    pub translation: Vec2,
    /// Initial zoom.
    pub scale: Vec2,
    /// Zoom anchor in surface pixels.
    pub pin: Point,
    /// Pan limits.
    pub translation_bounds: Rect,
    /// Zoom limits.
    pub scale_bounds: Rect,
    /// See [`ControllerOptions::drag_enabled`].
    pub drag_enabled: bool,
    /// See [`ControllerOptions::pinch_enabled`].
    pub pinch_enabled: bool,
    /// See [`ControllerOptions::wheel_enabled`].
    pub wheel_enabled: bool,
    /// See [`ControllerOptions::keys_enabled`].
    pub keys_enabled: bool,
    /// See [`ControllerOptions::events_reversed`].
    pub events_reversed: bool,
    /// See [`ControllerOptions::dynamic_translation_bounds`].
    pub dynamic_translation_bounds: bool,
    /// Pan and zoom multipliers.
    pub speed: Speed,
    /// See [`ControllerOptions::touch_sensitivity`].
    pub touch_sensitivity: f64,
    /// See [`ControllerOptions::click_sensitivity`].
    pub click_sensitivity_ms: u64,
    /// See [`ControllerOptions::use_button`].
    pub button_policy: ButtonPolicy,
    /// See [`ControllerOptions::scale_mode`].
    pub scale_mode: ScaleMode,
    /// See [`ControllerOptions::device_class`].
    pub device_class: DeviceClass,
    /// See [`ControllerOptions::pixels_per_line`].
    pub pixels_per_line: f64,
    /// See [`ControllerOptions::dispatch_order`].
    pub dispatch_order: DispatchOrder,
}

impl ControllerConfig {
    /// Validates options for a surface of the given size.
    ///
    /// Translation, scale and pin need two finite values, scale values must
    /// also be positive. Bounds need four values that are not NaN (infinite
    /// limits are fine). Scalar tuning values must be finite.
    pub fn from_options(options: &ControllerOptions, surface: Size) -> Result<Self> {
        let translation = finite_pair("translation", &options.translation)?;
        let scale = finite_pair("scale", &options.scale)?;
        if scale.x <= 0.0 || scale.y <= 0.0 {
            return Err(Error::NotNumericArray {
                field: "scale",
                min_len: 2,
            });
        }
        let pin = match &options.pin {
            Some(values) => finite_pair("pin", values)?.to_point(),
            None => (surface.to_vec2() * 0.5).to_point(),
        };
        let translation_bounds = bounds("translation_bounds", &options.translation_bounds)?;
        let scale_bounds = bounds("scale_bounds", &options.scale_bounds)?;

        Ok(Self {
            translation,
            scale,
            pin,
            translation_bounds,
            scale_bounds,
            drag_enabled: options.drag_enabled,
            pinch_enabled: options.pinch_enabled,
            wheel_enabled: options.wheel_enabled,
            keys_enabled: options.keys_enabled,
            events_reversed: options.events_reversed,
            dynamic_translation_bounds: options.dynamic_translation_bounds,
            speed: Speed {
                translation: finite("translate_speed", options.translate_speed)?,
                scale: finite("scale_speed", options.scale_speed)?,
            },
            touch_sensitivity: finite("touch_sensitivity", options.touch_sensitivity)?,
            click_sensitivity_ms: options.click_sensitivity,
            button_policy: options.use_button,
            scale_mode: options.scale_mode,
            device_class: options.device_class,
            pixels_per_line: finite("pixels_per_line", options.pixels_per_line)?,
            dispatch_order: options.dispatch_order,
        })
    }
}

fn rect_values(r: Rect) -> Vec<f64> {
    vec![r.x0, r.y0, r.x1, r.y1]
}

fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NotNumericArray { field, min_len: 1 })
    }
}

fn finite_pair(field: &'static str, values: &[f64]) -> Result<Vec2> {
    match values {
        [x, y, ..] if x.is_finite() && y.is_finite() => Ok(Vec2::new(*x, *y)),
        _ => Err(Error::NotNumericArray { field, min_len: 2 }),
    }
}

fn bounds(field: &'static str, values: &[f64]) -> Result<Rect> {
    match values {
        [x0, y0, x1, y1, ..] if ![x0, y0, x1, y1].iter().any(|v| v.is_nan()) => {
            Ok(Rect::new(*x0, *y0, *x1, *y1))
        }
        _ => Err(Error::NotNumericArray { field, min_len: 4 }),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Point, Size, Vec2};

    use super::*;

    const SURFACE: Size = Size::new(400.0, 300.0);

    #[test]
    fn defaults_validate() {
        let config = ControllerConfig::from_options(&ControllerOptions::default(), SURFACE).unwrap();
        assert_eq!(config.translation, Vec2::ZERO);
        assert_eq!(config.scale, Vec2::new(1.0, 1.0));
        assert_eq!(config.pin, Point::new(200.0, 150.0));
        assert_eq!(config.translation_bounds, UNBOUNDED);
        assert_eq!(config.scale_bounds, DEFAULT_SCALE_BOUNDS);
        assert_eq!(config.click_sensitivity_ms, 800);
        assert_eq!(config.pixels_per_line, 16.0);
    }

    #[test]
    fn short_or_nan_arrays_are_rejected() {
        let short = ControllerOptions {
            translation: vec![1.0],
            ..ControllerOptions::default()
        };
        assert_eq!(
            ControllerConfig::from_options(&short, SURFACE),
            Err(Error::NotNumericArray {
                field: "translation",
                min_len: 2
            })
        );

        let nan_bound = ControllerOptions {
            scale_bounds: vec![0.5, 0.5, f64::NAN, 4.0],
            ..ControllerOptions::default()
        };
        assert_eq!(
            ControllerConfig::from_options(&nan_bound, SURFACE),
            Err(Error::NotNumericArray {
                field: "scale_bounds",
                min_len: 4
            })
        );

        let three_bounds = ControllerOptions {
            translation_bounds: vec![0.0, 0.0, 10.0],
            ..ControllerOptions::default()
        };
        assert!(ControllerConfig::from_options(&three_bounds, SURFACE).is_err());
    }

    #[test]
    fn scale_must_be_positive() {
        let options = ControllerOptions {
            scale: vec![1.0, 0.0],
            ..ControllerOptions::default()
        };
        assert_eq!(
            ControllerConfig::from_options(&options, SURFACE),
            Err(Error::NotNumericArray {
                field: "scale",
                min_len: 2
            })
        );
    }

    #[test]
    fn explicit_pin_and_extra_values() {
        let options = ControllerOptions {
            pin: Some(vec![10.0, 20.0, 99.0]),
            ..ControllerOptions::default()
        };
        let config = ControllerConfig::from_options(&options, SURFACE).unwrap();
        assert_eq!(config.pin, Point::new(10.0, 20.0));
    }

    #[test]
    fn non_finite_speed_is_rejected() {
        let options = ControllerOptions {
            scale_speed: f64::INFINITY,
            ..ControllerOptions::default()
        };
        assert_eq!(
            ControllerConfig::from_options(&options, SURFACE),
            Err(Error::NotNumericArray {
                field: "scale_speed",
                min_len: 1
            })
        );
    }

    #[test]
    fn button_policy_masks() {
        assert!(ButtonPolicy::Left.accepts(Buttons::LEFT));
        assert!(!ButtonPolicy::Left.accepts(Buttons::RIGHT));
        assert!(ButtonPolicy::Both.accepts(Buttons::RIGHT));
        assert!(!ButtonPolicy::Both.accepts(Buttons::WHEEL));
        assert!(ButtonPolicy::All.accepts(Buttons::WHEEL));
        assert!(!ButtonPolicy::All.accepts(Buttons::empty()));
    }
}
