//! Shared boundary types for the canvas code generator.
//!
//! This module defines the engine-facing vocabulary shared by the model and
//! the emitters:
//! - Scene kinds and the Phaser constants the generated code refers to
//! - `TextureRef`, the already-resolved form of an asset key
//! - Helpers that render Rust values as JavaScript literals

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Engine enums
// ---------------------------------------------------------------------------

/// What the generated file describes. Drives the header/footer boilerplate
/// and the factory receiver (`this` vs `this.game`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    State,
    #[default]
    Group,
    Sprite,
}

impl SceneKind {
    /// Receiver of the `add.*` factory calls.
    pub fn systems_chain(self) -> &'static str {
        match self {
            SceneKind::State => "this",
            SceneKind::Group | SceneKind::Sprite => "this.game",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicsType {
    #[default]
    Arcade,
    P2,
    Ninja,
    Box2d,
}

impl PhysicsType {
    pub fn phaser_name(self) -> &'static str {
        match self {
            PhysicsType::Arcade => "Phaser.Physics.ARCADE",
            PhysicsType::P2 => "Phaser.Physics.P2JS",
            PhysicsType::Ninja => "Phaser.Physics.NINJA",
            PhysicsType::Box2d => "Phaser.Physics.BOX2D",
        }
    }
}

/// Arcade physics sort direction of a group. `Null` is the engine default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Null,
    LeftRight,
    RightLeft,
    TopBottom,
    BottomTop,
}

impl SortDirection {
    pub fn phaser_name(self) -> &'static str {
        match self {
            SortDirection::Null => "null",
            SortDirection::LeftRight => "Phaser.Physics.Arcade.LEFT_RIGHT",
            SortDirection::RightLeft => "Phaser.Physics.Arcade.RIGHT_LEFT",
            SortDirection::TopBottom => "Phaser.Physics.Arcade.TOP_BOTTOM",
            SortDirection::BottomTop => "Phaser.Physics.Arcade.BOTTOM_TOP",
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved asset references
// ---------------------------------------------------------------------------

/// An asset key as resolved by the asset catalog: the texture to load plus,
/// for multi-frame assets, which frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextureRef {
    Image { key: String },
    SpritesheetFrame { key: String, index: u32 },
    AtlasFrame { key: String, frame: String },
}

impl TextureRef {
    /// Key of the underlying asset (the image, spritesheet or atlas).
    pub fn asset_key(&self) -> &str {
        match self {
            TextureRef::Image { key }
            | TextureRef::SpritesheetFrame { key, .. }
            | TextureRef::AtlasFrame { key, .. } => key,
        }
    }

    /// Frame argument: numeric index for spritesheets, quoted name for
    /// atlases, `null` for plain images.
    pub fn frame_literal(&self) -> String {
        match self {
            TextureRef::Image { .. } => "null".into(),
            TextureRef::SpritesheetFrame { index, .. } => index.to_string(),
            TextureRef::AtlasFrame { frame, .. } => js_string(frame),
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, TextureRef::Image { .. })
    }
}

/// A frame reference inside an animation or a button state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameRef {
    Index(u32),
    Name(String),
}

impl FrameRef {
    pub fn literal(&self) -> String {
        match self {
            FrameRef::Index(i) => i.to_string(),
            FrameRef::Name(name) => js_string(name),
        }
    }
}

// ---------------------------------------------------------------------------
// JavaScript literals
// ---------------------------------------------------------------------------

/// Render a number at full precision. Integral values print without a
/// fractional part.
pub fn js_number(v: f64) -> String {
    if v == 0.0 {
        // Folds -0 into 0.
        return "0".into();
    }
    format!("{v}")
}

/// Render a spatial coordinate, rounded to the nearest integer. Ties round
/// toward positive infinity.
pub fn js_round(v: f64) -> String {
    js_number((v + 0.5).floor())
}

/// Single-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// `null` for a missing or empty expression, the expression itself otherwise.
pub fn js_or_null(expr: Option<&str>) -> String {
    match expr.map(str::trim) {
        Some(e) if !e.is_empty() => e.to_string(),
        _ => "null".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_drop_integral_fraction() {
        assert_eq!(js_number(45.0), "45");
        assert_eq!(js_number(0.5), "0.5");
        assert_eq!(js_number(-0.0), "0");
        assert_eq!(js_number(10000.0), "10000");
    }

    #[test]
    fn coordinates_round_to_nearest() {
        assert_eq!(js_round(10.4), "10");
        assert_eq!(js_round(10.6), "11");
        assert_eq!(js_round(-3.5), "-3");
        assert_eq!(js_round(2.5), "3");
        assert_eq!(js_round(-0.4), "0");
    }

    #[test]
    fn strings_are_single_quoted_and_escaped() {
        assert_eq!(js_string("hero"), "'hero'");
        assert_eq!(js_string("it's"), "'it\\'s'");
    }

    #[test]
    fn frame_literals() {
        let sheet = TextureRef::SpritesheetFrame { key: "dude".into(), index: 3 };
        let atlas = TextureRef::AtlasFrame { key: "ui".into(), frame: "btn".into() };
        let image = TextureRef::Image { key: "sky".into() };
        assert_eq!(sheet.frame_literal(), "3");
        assert_eq!(atlas.frame_literal(), "'btn'");
        assert_eq!(image.frame_literal(), "null");
        assert_eq!(atlas.asset_key(), "ui");
    }

    #[test]
    fn empty_callback_is_null() {
        assert_eq!(js_or_null(None), "null");
        assert_eq!(js_or_null(Some("  ")), "null");
        assert_eq!(js_or_null(Some("this.onClick")), "this.onClick");
    }
}
