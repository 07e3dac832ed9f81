//! Property emitters.
//!
//! Each emitter returns the statements for one concern of one object, in the
//! order they must appear. A statement is only produced for values that
//! differ from the engine default (see `defaults`).

use crate::types::{js_number, js_string};

use super::defaults::{
    ANCHOR, ANGLE, ARCADE_BODY_TUNABLES, GROUP_POSITION, PairProp, Prop, TINT, TRANSFORM_PAIRS,
};
use super::naming::animation_var_name;
use super::source::{Animation, Body, SpriteInfo, Transform, UNSET_SIZE};

/// `<var>.<path> = <value>;` for every non-default entry of `table`.
pub fn assignments<T>(var: &str, prefix: &str, target: &T, table: &[Prop<T>]) -> Vec<String> {
    table
        .iter()
        .filter(|prop| !prop.is_default(target))
        .map(|prop| {
            format!(
                "{var}.{prefix}{} = {};",
                prop.path,
                (prop.get)(target).literal()
            )
        })
        .collect()
}

/// `<var>.<path>.setTo(a, b);` for every non-default entry of `table`.
pub fn set_to<'t, T: 't>(
    var: &str,
    target: &T,
    table: impl IntoIterator<Item = &'t PairProp<T>>,
) -> Vec<String> {
    table
        .into_iter()
        .filter(|prop| !prop.is_default(target))
        .map(|prop| {
            let (a, b) = prop.render(target);
            format!("{var}.{}.setTo({a}, {b});", prop.path)
        })
        .collect()
}

/// Position (groups only), angle, scale and pivot.
pub fn transform(var: &str, t: &Transform, with_position: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if with_position {
        lines.extend(set_to(var, t, [&GROUP_POSITION]));
    }
    lines.extend(assignments(var, "", t, std::slice::from_ref(&ANGLE)));
    lines.extend(set_to(var, t, TRANSFORM_PAIRS));
    lines
}

/// Anchor and tint.
pub fn sprite_display(var: &str, sprite: &SpriteInfo) -> Vec<String> {
    let mut lines = set_to(var, sprite, [&ANCHOR]);
    lines.extend(assignments(var, "", sprite, std::slice::from_ref(&TINT)));
    lines
}

/// One `animations.add` call per animation, with the variable declaration
/// and `killOnComplete` flag where needed.
pub fn animations(var: &str, animations: &[Animation]) -> Vec<String> {
    let mut lines = Vec::new();
    for anim in animations {
        let anim_var = animation_var_name(var, &anim.name);
        let decl = if anim.public || anim.kill_on_complete {
            format!("var {anim_var} = ")
        } else {
            String::new()
        };
        let frames = anim
            .frames
            .iter()
            .map(|f| f.literal())
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format!(
            "{decl}{var}.animations.add({}, [{frames}], {}, {});",
            js_string(&anim.name),
            anim.frame_rate,
            anim.looping,
        ));
        if anim.kill_on_complete {
            lines.push(format!("{anim_var}.killOnComplete = true;"));
        }
    }
    lines
}

/// Physics enable, shape setup and non-default tunables.
///
/// Members of an arcade physics group already get a body from the group, so
/// the enable call is skipped for them.
pub fn body(var: &str, body: &Body, parent_is_arcade_group: bool) -> Vec<String> {
    let Some(arcade) = body.arcade() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    if !parent_is_arcade_group {
        lines.push(format!("this.game.physics.arcade.enable({var});"));
    }

    let offset = if arcade.offset_x != 0.0 || arcade.offset_y != 0.0 {
        format!(", {}, {}", js_number(arcade.offset_x), js_number(arcade.offset_y))
    } else {
        String::new()
    };

    match body {
        Body::ArcadeCircle { radius, .. } => {
            lines.push(format!("{var}.body.setCircle({}{offset});", js_number(*radius)));
        }
        Body::ArcadeRect { width, height, .. } => {
            if *width != UNSET_SIZE && *height != UNSET_SIZE {
                lines.push(format!(
                    "{var}.body.setSize({}, {}{offset});",
                    js_number(*width),
                    js_number(*height)
                ));
            }
        }
        Body::None => {}
    }

    lines.extend(assignments(var, "body.", arcade, ARCADE_BODY_TUNABLES));
    lines
}

/// `<var>.data = ...;` with `$$` bound to the variable. Multi-line data is
/// split so each line picks up the body indent.
pub fn extra_data(var: &str, data: Option<&str>) -> Vec<String> {
    let Some(data) = data.filter(|d| !d.trim().is_empty()) else {
        return Vec::new();
    };
    let statement = format!("{var}.data = {};", data.replace("$$", var));
    statement.split('\n').map(str::to_string).collect()
}
