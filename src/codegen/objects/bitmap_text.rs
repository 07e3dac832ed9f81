use serde::{Deserialize, Serialize};

use crate::types::{js_number, js_round, js_string};

use super::super::defaults::BITMAP_TEXT_PROPS;
use super::super::props;
use super::super::source::{ObjectInfo, SpriteInfo};
use super::{Emit, EmitContext, emit_sprite_like};

/// Text drawn with a bitmap-font asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitmapText {
    pub info: ObjectInfo,
    /// Key of the bitmap-font asset.
    pub font: String,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_size")]
    pub size: f64,
    #[serde(default = "default_align")]
    pub align: String,
    #[serde(default)]
    pub max_width: f64,
    #[serde(default)]
    pub sprite: SpriteInfo,
}

fn default_size() -> f64 {
    32.0
}

fn default_align() -> String {
    "left".into()
}

impl Emit for BitmapText {
    fn emit(&self, cx: &EmitContext<'_>) -> Vec<String> {
        let t = &self.info.transform;
        let mut args = vec![
            js_round(t.x),
            js_round(t.y),
            js_string(&self.font),
            js_string(&self.text),
            js_number(self.size),
        ];
        args.extend(cx.parent_arg().map(str::to_string));

        let constructor = cx.factory("bitmapText", &args);
        let text_props = props::assignments(&self.info.name, "", self, BITMAP_TEXT_PROPS);
        emit_sprite_like(cx, &self.info, &self.sprite, text_props, constructor)
    }
}
