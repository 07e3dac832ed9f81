//! Engine defaults for every emitted property.
//!
//! Each table pairs a property path (as written after `<var>.`) with an
//! accessor into the model and the value the engine already uses when the
//! property is never assigned. Emitters walk these tables and only write
//! the properties whose current value differs.

use crate::types::{js_number, js_round, js_string};

use super::objects::{BitmapText, TileSprite};
use super::source::{ArcadeBody, GroupPhysics, SpriteInfo, Transform};

/// A property value as seen by the default comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Number(f64),
    Flag(bool),
    /// Raw JavaScript expression, emitted as-is.
    Expr(&'a str),
    /// String value, emitted quoted.
    Str(&'a str),
}

impl Value<'_> {
    pub fn literal(self) -> String {
        match self {
            Value::Number(v) => js_number(v),
            Value::Flag(b) => b.to_string(),
            Value::Expr(e) => e.to_string(),
            Value::Str(s) => js_string(s),
        }
    }
}

/// A single assignable property: `<var>.<path> = <value>;`.
pub struct Prop<T> {
    pub path: &'static str,
    pub get: fn(&T) -> Value<'_>,
    pub default: Value<'static>,
}

impl<T> Prop<T> {
    pub fn is_default(&self, target: &T) -> bool {
        (self.get)(target) == self.default
    }
}

/// A two-component property written as `<var>.<path>.setTo(a, b);`.
pub struct PairProp<T> {
    pub path: &'static str,
    pub get: fn(&T) -> (f64, f64),
    pub default: (f64, f64),
    /// Spatial values are rounded to whole pixels when written.
    pub round: bool,
}

impl<T> PairProp<T> {
    pub fn is_default(&self, target: &T) -> bool {
        (self.get)(target) == self.default
    }

    pub fn render(&self, target: &T) -> (String, String) {
        let (a, b) = (self.get)(target);
        if self.round {
            (js_round(a), js_round(b))
        } else {
            (js_number(a), js_number(b))
        }
    }
}

// ---------------------------------------------------------------------------
// Display objects
// ---------------------------------------------------------------------------

/// Groups have no position argument in their constructor.
pub static GROUP_POSITION: PairProp<Transform> = PairProp {
    path: "position",
    get: |t| (t.x, t.y),
    default: (0.0, 0.0),
    round: true,
};

pub static ANGLE: Prop<Transform> = Prop {
    path: "angle",
    get: |t| Value::Number(t.angle),
    default: Value::Number(0.0),
};

pub static TRANSFORM_PAIRS: &[PairProp<Transform>] = &[
    PairProp {
        path: "scale",
        get: |t| (t.scale_x, t.scale_y),
        default: (1.0, 1.0),
        round: false,
    },
    PairProp {
        path: "pivot",
        get: |t| (t.pivot_x, t.pivot_y),
        default: (0.0, 0.0),
        round: false,
    },
];

pub const DEFAULT_TINT: &str = "0xffffff";

pub static ANCHOR: PairProp<SpriteInfo> = PairProp {
    path: "anchor",
    get: |s| (s.anchor_x, s.anchor_y),
    default: (0.0, 0.0),
    round: false,
};

pub static TINT: Prop<SpriteInfo> = Prop {
    path: "tint",
    get: |s| Value::Expr(s.tint.as_deref().map(str::trim).unwrap_or(DEFAULT_TINT)),
    default: Value::Expr(DEFAULT_TINT),
};

pub static TILE_PAIRS: &[PairProp<TileSprite>] = &[
    PairProp {
        path: "tilePosition",
        get: |t| (t.tile_position_x, t.tile_position_y),
        default: (0.0, 0.0),
        round: true,
    },
    PairProp {
        path: "tileScale",
        get: |t| (t.tile_scale_x, t.tile_scale_y),
        default: (1.0, 1.0),
        round: false,
    },
];

pub static BITMAP_TEXT_PROPS: &[Prop<BitmapText>] = &[
    Prop {
        path: "align",
        get: |t| Value::Str(&t.align),
        default: Value::Str("left"),
    },
    Prop {
        path: "maxWidth",
        get: |t| Value::Number(t.max_width),
        default: Value::Number(0.0),
    },
];

pub static GROUP_PROPS: &[Prop<GroupPhysics>] = &[Prop {
    path: "physicsSortDirection",
    get: |g| Value::Expr(g.sort_direction.phaser_name()),
    default: Value::Expr("null"),
}];

// ---------------------------------------------------------------------------
// Arcade physics body
// ---------------------------------------------------------------------------

macro_rules! number {
    ($path:literal, $field:ident, $default:expr) => {
        Prop {
            path: $path,
            get: |b| Value::Number(b.$field),
            default: Value::Number($default),
        }
    };
}

macro_rules! flag {
    ($path:literal, $field:ident, $default:expr) => {
        Prop {
            path: $path,
            get: |b| Value::Flag(b.$field),
            default: Value::Flag($default),
        }
    };
}

/// Written after the shape setup, in this order, under `<var>.body.`.
pub static ARCADE_BODY_TUNABLES: &[Prop<ArcadeBody>] = &[
    number!("mass", mass, 1.0),
    flag!("moves", moves, true),
    flag!("immovable", immovable, false),
    flag!("collideWorldBounds", collide_world_bounds, false),
    flag!("allowRotation", allow_rotation, true),
    flag!("allowGravity", allow_gravity, true),
    number!("bounce.x", bounce_x, 0.0),
    number!("bounce.y", bounce_y, 0.0),
    number!("velocity.x", velocity_x, 0.0),
    number!("velocity.y", velocity_y, 0.0),
    number!("maxVelocity.x", max_velocity_x, 10_000.0),
    number!("maxVelocity.y", max_velocity_y, 10_000.0),
    number!("acceleration.x", acceleration_x, 0.0),
    number!("acceleration.y", acceleration_y, 0.0),
    number!("drag.x", drag_x, 0.0),
    number!("drag.y", drag_y, 0.0),
    number!("gravity.x", gravity_x, 0.0),
    number!("gravity.y", gravity_y, 0.0),
    number!("friction.x", friction_x, 1.0),
    number!("friction.y", friction_y, 0.0),
    number!("angularVelocity", angular_velocity, 0.0),
    number!("maxAngular", max_angular, 1000.0),
    number!("angularAcceleration", angular_acceleration, 0.0),
    number!("angularDrag", angular_drag, 0.0),
    flag!("checkCollision.none", check_collision_none, false),
    flag!("checkCollision.up", check_collision_up, true),
    flag!("checkCollision.down", check_collision_down, true),
    flag!("checkCollision.left", check_collision_left, true),
    flag!("checkCollision.right", check_collision_right, true),
    flag!("skipQuadTree", skip_quad_tree, false),
];
