// Test serialization using json
#![cfg(feature = "serde")]

use sdf_font::fonts::{FaceMetrics, GlyphMetrics};
use sdf_font::{AtlasFormat, Config, Rect, Vec2};
use serde::{de::Deserialize, ser::Serialize};
use std::cmp::PartialEq;
use std::fmt::Debug;

fn test<X: Debug + PartialEq + Serialize + for<'a> Deserialize<'a>>(x: X, t: &str) {
    match serde_json::to_string(&x) {
        Ok(text) => assert_eq!(text, t),
        Err(err) => panic!("Ser of '{x:?}' failed: {err}"),
    }

    match serde_json::from_str::<X>(t) {
        Ok(v) => assert_eq!(v, x),
        Err(err) => panic!("Deser of '{t}' failed: {err}"),
    }
}

#[test]
fn vec2() {
    test(Vec2(1.0, 2.0), "[1.0,2.0]");
}

#[test]
fn rect() {
    test(
        Rect::new(0.0, 1.0, 2.5, 3.0),
        "{\"min\":[0.0,1.0],\"max\":[2.5,3.0]}",
    );
}

#[test]
fn metrics() {
    test(
        GlyphMetrics {
            x: 2.0,
            y: 4.0,
            w: 10.0,
            h: 12.0,
            dx: -1.0,
            dy: 3.0,
            d: 9.5,
        },
        "{\"x\":2.0,\"y\":4.0,\"w\":10.0,\"h\":12.0,\"dx\":-1.0,\"dy\":3.0,\"d\":9.5}",
    );
    test(
        FaceMetrics {
            size: 32.0,
            leading: 40.0,
            ascent: 30.0,
            descent: 10.0,
            space_width: 8.0,
        },
        "{\"size\":32.0,\"leading\":40.0,\"ascent\":30.0,\"descent\":10.0,\"space_width\":8.0}",
    );
}

#[test]
fn config() {
    test(AtlasFormat::LumaAlpha, "\"LumaAlpha\"");
    test(
        Config::new(AtlasFormat::Rgba, 0.5),
        "{\"atlas_format\":\"Rgba\",\"space_fallback\":0.5}",
    );
}
