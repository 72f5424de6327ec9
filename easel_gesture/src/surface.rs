// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size};

/// The drawing surface a [`Controller`](crate::Controller) steers.
///
/// Painting is entirely up to the host; the controller only reads the
/// surface geometry and hands over the world → surface transform.
pub trait Surface {
    /// Size of the surface in pixels.
    fn size(&self) -> Size;

    /// Client-space position of the surface's top-left corner.
    ///
    /// Event positions are given in client space and have this subtracted
    /// before routing.
    fn origin(&self) -> Point {
        Point::ZERO
    }

    /// Installs the current view transform.
    fn set_transform(&mut self, transform: Affine);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn origin(&self) -> Point {
        (**self).origin()
    }

    fn set_transform(&mut self, transform: Affine) {
        (**self).set_transform(transform);
    }
}
