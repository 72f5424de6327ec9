// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of the input channels a controller listens on.

use crate::config::ControllerConfig;

bitflags::bitflags! {
    /// Raw input channels.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct InputChannels: u8 {
        /// Pointer press-move-release panning.
        const DRAG  = 0b00_0001;
        /// Two-finger zoom.
        const PINCH = 0b00_0010;
        /// Wheel zoom.
        const WHEEL = 0b00_0100;
        /// Single-finger panning.
        const PAN   = 0b00_1000;
        /// Device tilt. Reserved; never bound.
        const TILT  = 0b01_0000;
        /// Press/release click recognition.
        const CLICK = 0b10_0000;
    }
}

impl InputChannels {
    /// Channels that make the controller listen to pointer events.
    pub(crate) const POINTER: Self = Self::DRAG.union(Self::CLICK);
    /// Channels that make the controller listen to touch events.
    pub(crate) const TOUCH: Self = Self::PAN.union(Self::PINCH).union(Self::CLICK);
}

/// Which kind of device primarily drives the surface.
///
/// The host decides this; it is never detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceClass {
    /// Mouse or pen: click, drag and wheel.
    #[default]
    PointerPrimary,
    /// Touch screen: click, one-finger pan and pinch.
    TouchPrimary,
}

impl DeviceClass {
    /// Every channel this device class can use.
    #[must_use]
    pub fn channels(self) -> InputChannels {
        match self {
            Self::PointerPrimary => InputChannels::CLICK | InputChannels::DRAG | InputChannels::WHEEL,
            Self::TouchPrimary => InputChannels::CLICK | InputChannels::PAN | InputChannels::PINCH,
        }
    }
}

/// The set of bound input channels.
///
/// Binding is idempotent: a channel that is already bound stays bound and
/// is not registered a second time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputAdapterSet {
    bound: InputChannels,
}

impl InputAdapterSet {
    /// Creates a registry with nothing bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Channels currently bound.
    #[must_use]
    pub fn bound(&self) -> InputChannels {
        self.bound
    }

    /// Returns `true` if every channel in `channels` is bound.
    #[must_use]
    pub fn is_bound(&self, channels: InputChannels) -> bool {
        self.bound.contains(channels)
    }

    /// Binds channels and returns the ones that were not bound before.
    ///
    /// [`InputChannels::TILT`] is reserved and silently skipped.
    pub fn bind(&mut self, channels: InputChannels) -> InputChannels {
        let fresh = channels.difference(self.bound).difference(InputChannels::TILT);
        if !fresh.is_empty() {
            self.bound.insert(fresh);
            tracing::debug!(channels = ?fresh, "input channels bound");
        }
        fresh
    }

    /// Unbinds channels and returns the ones that were bound.
    pub fn unbind(&mut self, channels: InputChannels) -> InputChannels {
        let removed = self.bound.intersection(channels);
        self.bound.remove(removed);
        removed
    }

    /// Channels requested by a configuration: the device class's channels,
    /// each gated by its `*_enabled` flag. `CLICK` is always requested.
    #[must_use]
    pub fn requested(config: &ControllerConfig) -> InputChannels {
        let mut wanted = config.device_class.channels();
        wanted.set(InputChannels::DRAG, wanted.contains(InputChannels::DRAG) && config.drag_enabled);
        wanted.set(InputChannels::PAN, wanted.contains(InputChannels::PAN) && config.drag_enabled);
        wanted.set(InputChannels::PINCH, wanted.contains(InputChannels::PINCH) && config.pinch_enabled);
        wanted.set(InputChannels::WHEEL, wanted.contains(InputChannels::WHEEL) && config.wheel_enabled);
        wanted
    }
}
