use serde::{Deserialize, Serialize};

use crate::types::{TextureRef, js_round, js_string};

use super::super::source::{ObjectInfo, SpriteInfo};
use super::{Emit, EmitContext, emit_sprite_like};

/// Image, spritesheet and atlas sprites. They share one factory and differ
/// only in the frame argument, which follows from the texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub info: ObjectInfo,
    pub texture: TextureRef,
    #[serde(default)]
    pub sprite: SpriteInfo,
}

impl Emit for Sprite {
    fn emit(&self, cx: &EmitContext<'_>) -> Vec<String> {
        let t = &self.info.transform;
        let mut args = vec![
            js_round(t.x),
            js_round(t.y),
            js_string(self.texture.asset_key()),
        ];
        match cx.parent_arg() {
            Some(parent) => {
                args.push(self.texture.frame_literal());
                args.push(parent.to_string());
            }
            // Trailing `null` frame is dropped together with the parent.
            None if self.texture.is_image() => {}
            None => args.push(self.texture.frame_literal()),
        }

        let constructor = cx.factory("sprite", &args);
        emit_sprite_like(cx, &self.info, &self.sprite, Vec::new(), constructor)
    }
}
