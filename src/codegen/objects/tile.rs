use serde::{Deserialize, Serialize};

use crate::types::{TextureRef, js_round, js_string};

use super::super::defaults::TILE_PAIRS;
use super::super::props;
use super::super::source::{ObjectInfo, SpriteInfo};
use super::{Emit, EmitContext, emit_sprite_like};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileSprite {
    pub info: ObjectInfo,
    pub texture: TextureRef,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub tile_position_x: f64,
    #[serde(default)]
    pub tile_position_y: f64,
    #[serde(default = "one")]
    pub tile_scale_x: f64,
    #[serde(default = "one")]
    pub tile_scale_y: f64,
    #[serde(default)]
    pub sprite: SpriteInfo,
}

fn one() -> f64 {
    1.0
}

impl Emit for TileSprite {
    fn emit(&self, cx: &EmitContext<'_>) -> Vec<String> {
        let t = &self.info.transform;
        let mut args = vec![
            js_round(t.x),
            js_round(t.y),
            js_round(self.width),
            js_round(self.height),
            js_string(self.texture.asset_key()),
        ];
        match cx.parent_arg() {
            Some(parent) => {
                args.push(self.texture.frame_literal());
                args.push(parent.to_string());
            }
            None if self.texture.is_image() => {}
            None => args.push(self.texture.frame_literal()),
        }

        let constructor = cx.factory("tileSprite", &args);
        let tile_props = props::set_to(&self.info.name, self, TILE_PAIRS);
        emit_sprite_like(cx, &self.info, &self.sprite, tile_props, constructor)
    }
}
