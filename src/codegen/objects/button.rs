use serde::{Deserialize, Serialize};

use crate::types::{FrameRef, TextureRef, js_or_null, js_round, js_string};

use super::super::source::{ObjectInfo, SpriteInfo};
use super::{Emit, EmitContext, emit_sprite_like};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    pub info: ObjectInfo,
    /// Texture and out-state frame.
    pub texture: TextureRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_frame: Option<FrameRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down_frame: Option<FrameRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up_frame: Option<FrameRef>,
    #[serde(default)]
    pub sprite: SpriteInfo,
}

fn frame_arg(frame: Option<&FrameRef>) -> String {
    frame.map_or_else(|| "null".to_string(), FrameRef::literal)
}

impl Emit for Button {
    fn emit(&self, cx: &EmitContext<'_>) -> Vec<String> {
        let t = &self.info.transform;

        // Image buttons have a single frame, so there is no out frame.
        let out_frame = if self.texture.is_image() {
            "null".to_string()
        } else {
            self.texture.frame_literal()
        };

        let mut args = vec![
            js_round(t.x),
            js_round(t.y),
            js_string(self.texture.asset_key()),
            js_or_null(self.callback.as_deref()),
            js_or_null(self.callback_context.as_deref()),
            frame_arg(self.over_frame.as_ref()),
            out_frame,
            frame_arg(self.down_frame.as_ref()),
            frame_arg(self.up_frame.as_ref()),
        ];
        args.extend(cx.parent_arg().map(str::to_string));

        let constructor = cx.factory("button", &args);
        emit_sprite_like(cx, &self.info, &self.sprite, Vec::new(), constructor)
    }
}
