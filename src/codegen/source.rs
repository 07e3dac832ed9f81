//! Scene model: the editor-authored description of a scene.
//!
//! These types define *what exists* in the scene, not how it is written out.
//! The generator reads them and turns them into script statements. The model
//! is owned upstream; the generator only ever borrows it.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{FrameRef, PhysicsType, SceneKind, SortDirection, TextureRef};

// Re-export object types so they remain accessible via `codegen::source::*`.
pub use super::objects::{BitmapText, Button, Group, Sprite, TileSprite};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneModel {
    pub settings: SceneSettings,
    #[serde(default)]
    pub world: Vec<SceneObject>,
}

impl SceneModel {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid scene model")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSettings {
    pub class_name: String,
    #[serde(default)]
    pub kind: SceneKind,
    /// Texture of the prefab itself (sprite scenes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_texture: Option<TextureRef>,
    /// `#rrggbb` stage colour set in the state's `init` (state scenes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_background_color: Option<String>,
    /// Physics system started in the state's `init` (state scenes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physics_system: Option<PhysicsType>,
    /// Asset-pack sections loaded in the state's `preload` (state scenes only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preload_sections: Vec<String>,
    #[serde(default = "default_pack_url")]
    pub pack_url: String,
}

fn default_pack_url() -> String {
    "assets/pack.json".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneObject {
    Group(Group),
    Image(Sprite),
    Spritesheet(Sprite),
    Atlas(Sprite),
    Button(Button),
    TileSprite(TileSprite),
    BitmapText(BitmapText),
}

impl SceneObject {
    pub fn info(&self) -> &ObjectInfo {
        match self {
            SceneObject::Group(o) => &o.info,
            SceneObject::Image(o) | SceneObject::Spritesheet(o) | SceneObject::Atlas(o) => {
                &o.info
            }
            SceneObject::Button(o) => &o.info,
            SceneObject::TileSprite(o) => &o.info,
            SceneObject::BitmapText(o) => &o.info,
        }
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    /// Sprite-level data, for the variants that have it.
    pub fn sprite(&self) -> Option<&SpriteInfo> {
        match self {
            SceneObject::Group(_) => None,
            SceneObject::Image(o) | SceneObject::Spritesheet(o) | SceneObject::Atlas(o) => {
                Some(&o.sprite)
            }
            SceneObject::Button(o) => Some(&o.sprite),
            SceneObject::TileSprite(o) => Some(&o.sprite),
            SceneObject::BitmapText(o) => Some(&o.sprite),
        }
    }
}

// ---------------------------------------------------------------------------
// Shared object data
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

fn is_true(b: &bool) -> bool {
    *b
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectInfo {
    pub name: String,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub generate_code: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub public: bool,
    #[serde(default)]
    pub transform: Transform,
}

impl ObjectInfo {
    pub fn named(name: impl Into<String>) -> Self {
        ObjectInfo {
            name: name.into(),
            generate_code: true,
            public: false,
            transform: Transform::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub pivot_x: f64,
    pub pivot_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
        }
    }
}

/// Display data shared by every sprite-like object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteInfo {
    pub anchor_x: f64,
    pub anchor_y: f64,
    /// Tint as a JS expression, e.g. `0xff0000`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tint: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<Animation>,
    pub body: Body,
    /// Free-form expression assigned to `<var>.data`. `$$` stands for the
    /// object's variable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub name: String,
    pub frames: Vec<FrameRef>,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default)]
    pub looping: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub public: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub kill_on_complete: bool,
}

fn default_frame_rate() -> u32 {
    60
}

// ---------------------------------------------------------------------------
// Physics bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Body {
    #[default]
    None,
    ArcadeCircle {
        radius: f64,
        #[serde(default)]
        arcade: ArcadeBody,
    },
    ArcadeRect {
        /// `-1` means "use the texture size".
        #[serde(default = "unset_size")]
        width: f64,
        #[serde(default = "unset_size")]
        height: f64,
        #[serde(default)]
        arcade: ArcadeBody,
    },
}

pub const UNSET_SIZE: f64 = -1.0;

fn unset_size() -> f64 {
    UNSET_SIZE
}

impl Body {
    pub fn arcade(&self) -> Option<&ArcadeBody> {
        match self {
            Body::None => None,
            Body::ArcadeCircle { arcade, .. } | Body::ArcadeRect { arcade, .. } => Some(arcade),
        }
    }
}

/// Arcade body tunables. `Default` yields the engine defaults, which are also
/// listed in `defaults::ARCADE_BODY_TUNABLES`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeBody {
    pub offset_x: f64,
    pub offset_y: f64,
    pub mass: f64,
    pub moves: bool,
    pub immovable: bool,
    pub collide_world_bounds: bool,
    pub allow_rotation: bool,
    pub allow_gravity: bool,
    pub bounce_x: f64,
    pub bounce_y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub max_velocity_x: f64,
    pub max_velocity_y: f64,
    pub acceleration_x: f64,
    pub acceleration_y: f64,
    pub drag_x: f64,
    pub drag_y: f64,
    pub gravity_x: f64,
    pub gravity_y: f64,
    pub friction_x: f64,
    pub friction_y: f64,
    pub angular_velocity: f64,
    pub max_angular: f64,
    pub angular_acceleration: f64,
    pub angular_drag: f64,
    pub check_collision_none: bool,
    pub check_collision_up: bool,
    pub check_collision_down: bool,
    pub check_collision_left: bool,
    pub check_collision_right: bool,
    pub skip_quad_tree: bool,
}

impl Default for ArcadeBody {
    fn default() -> Self {
        ArcadeBody {
            offset_x: 0.0,
            offset_y: 0.0,
            mass: 1.0,
            moves: true,
            immovable: false,
            collide_world_bounds: false,
            allow_rotation: true,
            allow_gravity: true,
            bounce_x: 0.0,
            bounce_y: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
            max_velocity_x: 10_000.0,
            max_velocity_y: 10_000.0,
            acceleration_x: 0.0,
            acceleration_y: 0.0,
            drag_x: 0.0,
            drag_y: 0.0,
            gravity_x: 0.0,
            gravity_y: 0.0,
            friction_x: 1.0,
            friction_y: 0.0,
            angular_velocity: 0.0,
            max_angular: 1000.0,
            angular_acceleration: 0.0,
            angular_drag: 0.0,
            check_collision_none: false,
            check_collision_up: true,
            check_collision_down: true,
            check_collision_left: true,
            check_collision_right: true,
            skip_quad_tree: false,
        }
    }
}

/// Group-level physics settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupPhysics {
    pub physics_group: bool,
    pub body_type: PhysicsType,
    pub sort_direction: SortDirection,
}
