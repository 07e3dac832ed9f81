//! Class boilerplate around the generated statements, one shape per scene
//! kind. The header ends just after the pre-init region; the footer starts
//! at the post-init region and runs to the end of the file.

use std::fmt::Write;

use crate::types::{SceneKind, TextureRef, js_string};

use super::regions::{
    END_GENERATED_CODE, POST_INIT_BEGIN, POST_INIT_END, PRE_INIT_BEGIN, PRE_INIT_END,
};
use super::source::SceneSettings;

pub fn header(settings: &SceneSettings, indent: &str, pre_init: &str) -> String {
    let class = settings.class_name.as_str();
    let mut out = String::new();

    match settings.kind {
        SceneKind::Group => {
            let _ = write!(
                out,
                "/**\n\
                 \x20* {class}.\n\
                 \x20* @param {{Phaser.Game}} aGame A reference to the currently running game.\n\
                 \x20* @param {{Phaser.Group}} aParent The parent Group (or other {{@link DisplayObject}}) that this group will be added to.\n\
                 \x20* @param {{string}} aName A name for this group. Not used internally but useful for debugging.\n\
                 \x20* @param {{boolean}} aAddToStage If true this group will be added directly to the Game.Stage instead of Game.World.\n\
                 \x20* @param {{boolean}} aEnableBody If true all Sprites created with {{@link #create}} will have a physics body created on them.\n\
                 \x20* @param {{number}} aPhysicsBodyType The physics body type to use when physics bodies are automatically added.\n\
                 \x20*/\n\
                 function {class}(aGame, aParent, aName, aAddToStage, aEnableBody, aPhysicsBodyType) {{\n\
                 \n\
                 {indent}Phaser.Group.call(this, aGame, aParent, aName, aAddToStage, aEnableBody, aPhysicsBodyType);\n"
            );
        }
        SceneKind::Sprite => {
            let _ = write!(
                out,
                "/**\n\
                 \x20* {class}.\n\
                 \x20* @param {{Phaser.Game}} aGame A reference to the currently running game.\n\
                 \x20* @param {{Number}} aX The x coordinate (in world space) to position the Sprite at.\n\
                 \x20* @param {{Number}} aY The y coordinate (in world space) to position the Sprite at.\n\
                 \x20* @param {{any}} aKey The image or texture used by the Sprite during rendering.\n\
                 \x20* @param {{any}} aFrame The sprite sheet or texture atlas frame to use.\n\
                 \x20*/\n\
                 function {class}(aGame, aX, aY, aKey, aFrame) {{\n\
                 \n\
                 {indent}Phaser.Sprite.call(this, aGame, aX, aY, {}, {});\n",
                prefab_key(settings.sprite_texture.as_ref()),
                prefab_frame(settings.sprite_texture.as_ref()),
            );
        }
        SceneKind::State => {
            let _ = write!(
                out,
                "/**\n\
                 \x20* {class}.\n\
                 \x20*/\n\
                 function {class}() {{\n\
                 \n\
                 {indent}Phaser.State.call(this);\n\
                 \n\
                 }}\n\
                 \n"
            );
            write_prototype(&mut out, class, "State");
            write_state_init(&mut out, settings, indent);
            write_state_preload(&mut out, settings, indent);
            let _ = writeln!(out, "{class}.prototype.create = function () {{");
        }
    }

    let _ = write!(out, "{indent}{PRE_INIT_BEGIN}{pre_init}{PRE_INIT_END}\n\n");
    out
}

pub fn footer(settings: &SceneSettings, indent: &str, post_init: &str, trailing: &str) -> String {
    let class = settings.class_name.as_str();
    let mut out = String::new();

    let _ = writeln!(out, "{indent}{POST_INIT_BEGIN}{post_init}{POST_INIT_END}");
    match settings.kind {
        SceneKind::Group => {
            out.push_str("}\n\n");
            write_prototype(&mut out, class, "Group");
        }
        SceneKind::Sprite => {
            out.push_str("}\n\n");
            write_prototype(&mut out, class, "Sprite");
        }
        SceneKind::State => out.push_str("};\n\n"),
    }
    let _ = write!(out, "{END_GENERATED_CODE}{trailing}");
    out
}

fn write_prototype(out: &mut String, class: &str, base: &str) {
    let _ = write!(
        out,
        "/** @type Phaser.{base} */\n\
         var {class}_proto = Object.create(Phaser.{base}.prototype);\n\
         {class}.prototype = {class}_proto;\n\
         {class}.prototype.constructor = {class};\n\
         \n"
    );
}

fn write_state_init(out: &mut String, settings: &SceneSettings, indent: &str) {
    let mut body = Vec::new();
    if let Some(color) = settings.stage_background_color.as_deref() {
        body.push(format!("this.stage.backgroundColor = {};", js_string(color)));
    }
    if let Some(physics) = settings.physics_system {
        body.push(format!("this.physics.startSystem({});", physics.phaser_name()));
    }
    if body.is_empty() {
        return;
    }
    write_method(out, &settings.class_name, "init", &body, indent);
}

fn write_state_preload(out: &mut String, settings: &SceneSettings, indent: &str) {
    if settings.preload_sections.is_empty() {
        return;
    }
    let url = js_string(&settings.pack_url);
    let body: Vec<String> = settings
        .preload_sections
        .iter()
        .map(|section| format!("this.load.pack({}, {url});", js_string(section)))
        .collect();
    write_method(out, &settings.class_name, "preload", &body, indent);
}

fn write_method(out: &mut String, class: &str, method: &str, body: &[String], indent: &str) {
    let _ = writeln!(out, "{class}.prototype.{method} = function () {{");
    out.push('\n');
    for line in body {
        let _ = writeln!(out, "{indent}{line}");
    }
    out.push('\n');
    out.push_str("};\n\n");
}

fn prefab_key(texture: Option<&TextureRef>) -> String {
    match texture {
        Some(t) => format!("aKey || {}", js_string(t.asset_key())),
        None => "aKey".into(),
    }
}

fn prefab_frame(texture: Option<&TextureRef>) -> String {
    match texture {
        Some(t) if !t.is_image() => format!(
            "aFrame === undefined || aFrame === null ? {} : aFrame",
            t.frame_literal()
        ),
        _ => "aFrame".into(),
    }
}
