//! Object types and their emit implementations.
//!
//! Each object lives in its own module with its struct definition and
//! `Emit` implementation side by side.

mod bitmap_text;
mod button;
mod group;
mod sprite;
mod tile;

pub use bitmap_text::BitmapText;
pub use button::Button;
pub use group::Group;
pub use sprite::Sprite;
pub use tile::TileSprite;

use log::debug;

use crate::types::{PhysicsType, SceneKind};

use super::props;
use super::source::{ObjectInfo, SceneObject, SpriteInfo};

/// Where an object sits in the tree while it is being emitted.
#[derive(Debug, Clone, Copy)]
pub enum Parent<'a> {
    World,
    Group(&'a Group),
}

#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    pub kind: SceneKind,
    pub parent: Parent<'a>,
}

impl<'a> EmitContext<'a> {
    pub fn world(kind: SceneKind) -> Self {
        EmitContext {
            kind,
            parent: Parent::World,
        }
    }

    /// Context for the children of `group`.
    pub fn within<'b>(&self, group: &'b Group) -> EmitContext<'b> {
        EmitContext {
            kind: self.kind,
            parent: Parent::Group(group),
        }
    }

    /// The display object that owns new objects: `this` at world level,
    /// otherwise the enclosing group variable.
    pub fn parent_ref(&self) -> &'a str {
        match self.parent {
            Parent::World => "this",
            Parent::Group(group) => group.info.name.as_str(),
        }
    }

    /// Trailing parent argument of a sprite-like factory call. State scenes
    /// leave it off at every depth.
    pub fn parent_arg(&self) -> Option<&'a str> {
        match self.kind {
            SceneKind::State => None,
            _ => Some(self.parent_ref()),
        }
    }

    pub fn parent_is_arcade_group(&self) -> bool {
        match self.parent {
            Parent::World => false,
            Parent::Group(group) => {
                group.physics.physics_group && group.physics.body_type == PhysicsType::Arcade
            }
        }
    }

    /// `this.game.add.<factory>(<args>)`.
    pub fn factory(&self, factory: &str, args: &[String]) -> String {
        format!(
            "{}.add.{factory}({})",
            self.kind.systems_chain(),
            args.join(", ")
        )
    }
}

/// Emit the statements that construct an object.
pub trait Emit {
    fn emit(&self, cx: &EmitContext<'_>) -> Vec<String>;
}

impl Emit for SceneObject {
    fn emit(&self, cx: &EmitContext<'_>) -> Vec<String> {
        if !self.info().generate_code {
            debug!("skipping {} and its subtree", self.name());
            return Vec::new();
        }
        debug!("emitting {}", self.name());
        match self {
            SceneObject::Group(o) => o.emit(cx),
            SceneObject::Image(o) => o.emit(cx),
            SceneObject::Spritesheet(o) => o.emit(cx),
            SceneObject::Atlas(o) => o.emit(cx),
            SceneObject::Button(o) => o.emit(cx),
            SceneObject::TileSprite(o) => o.emit(cx),
            SceneObject::BitmapText(o) => o.emit(cx),
        }
    }
}

/// Emit every object that generates code, with a blank line between blocks.
pub fn emit_all<'a>(
    objects: impl IntoIterator<Item = &'a SceneObject>,
    cx: &EmitContext<'_>,
) -> Vec<String> {
    let mut lines = Vec::new();
    for obj in objects.into_iter().filter(|o| o.info().generate_code) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(obj.emit(cx));
    }
    lines
}

/// Shared tail of every sprite-like object.
///
/// The property block is rendered first because its emptiness decides whether
/// the constructor line needs a variable. Block order is fixed: transform,
/// display, `subtype` props, animations, body, data.
fn emit_sprite_like(
    cx: &EmitContext<'_>,
    info: &ObjectInfo,
    sprite: &SpriteInfo,
    subtype: Vec<String>,
    constructor: String,
) -> Vec<String> {
    let var = info.name.as_str();

    let mut block = props::transform(var, &info.transform, false);
    block.extend(props::sprite_display(var, sprite));
    block.extend(subtype);
    block.extend(props::animations(var, &sprite.animations));
    block.extend(props::body(var, &sprite.body, cx.parent_is_arcade_group()));
    block.extend(props::extra_data(var, sprite.data.as_deref()));

    let decl = if !block.is_empty() || info.public {
        format!("var {var} = ")
    } else {
        String::new()
    };

    let mut lines = Vec::with_capacity(block.len() + 1);
    lines.push(format!("{decl}{constructor};"));
    lines.extend(block);
    lines
}
