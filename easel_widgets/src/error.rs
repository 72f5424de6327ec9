// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::types::WidgetId;

/// Errors raised while creating or registering widgets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// A geometry value (`x`, `y`, `dx`, `dy`) was NaN or infinite.
    #[error("widget geometry `{field}` is not a finite number")]
    NotANumber {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The widget is already attached to a layer.
    #[error("{0} is already registered")]
    AlreadyRegistered(WidgetId),
}
