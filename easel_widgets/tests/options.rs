// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for building widgets from loose option data.

use easel_widgets::{DefaultHandler, Position, Widget, WidgetError, WidgetLayer, WidgetOptions};

#[test]
fn builder_defaults() {
    let opts = WidgetOptions::new(1.0, 2.0, 3.0, 4.0);
    assert!(opts.enabled);
    assert!(!opts.draggable);
    assert_eq!(opts.z_index, 0);
    assert_eq!(opts.position, Position::ABSOLUTE);
}

#[test]
fn fresh_ids_for_each_created_widget() {
    let mut layer = WidgetLayer::<DefaultHandler>::new();
    let a = layer
        .create_widget(WidgetOptions::new(0.0, 0.0, 1.0, 1.0), DefaultHandler)
        .unwrap();
    let b = layer
        .create_widget(WidgetOptions::new(0.0, 0.0, 1.0, 1.0), DefaultHandler)
        .unwrap();
    assert_ne!(a, b);
    assert!(b > a, "newer widgets get larger ids");
}

#[test]
fn invalid_geometry_is_reported_by_field() {
    let mut layer = WidgetLayer::<DefaultHandler>::new();
    let err = layer
        .create_widget(WidgetOptions::new(0.0, 0.0, 1.0, f64::NAN), DefaultHandler)
        .unwrap_err();
    assert_eq!(err, WidgetError::NotANumber { field: "dy" });
    assert!(layer.is_empty());
}

#[test]
fn boxed_handlers_mix_in_one_layer() {
    use easel_widgets::WidgetHandler;

    struct Sticky;
    impl WidgetHandler for Sticky {
        fn focus(&mut self, _at: kurbo::Point) -> bool {
            true
        }
    }

    let mut layer: WidgetLayer<Box<dyn WidgetHandler>> = WidgetLayer::new();
    layer
        .add_widget(
            Widget::new(
                WidgetOptions::new(0.0, 0.0, 5.0, 5.0),
                Box::new(Sticky) as Box<dyn WidgetHandler>,
            )
            .unwrap(),
        )
        .unwrap();
    layer
        .add_widget(
            Widget::new(
                WidgetOptions::new(0.0, 0.0, 5.0, 5.0),
                Box::new(DefaultHandler) as Box<dyn WidgetHandler>,
            )
            .unwrap(),
        )
        .unwrap();
    assert_eq!(layer.len(), 2);
}

#[cfg(feature = "serde")]
#[test]
fn options_from_json() {
    let opts: WidgetOptions = serde_json::from_str(
        r#"{ "x": 10, "y": 20, "dx": 30, "dy": 40, "draggable": true, "position": "FIXED | UNSCALABLE" }"#,
    )
    .unwrap();
    assert_eq!(opts.x, 10.0);
    assert!(opts.enabled);
    assert!(opts.draggable);
    assert_eq!(opts.position, Position::FIXED | Position::UNSCALABLE);

    let missing: Result<WidgetOptions, _> = serde_json::from_str(r#"{ "x": 1, "y": 2 }"#);
    assert!(missing.is_err(), "geometry is required");
}
