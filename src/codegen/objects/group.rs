use serde::{Deserialize, Serialize};

use super::super::defaults::GROUP_PROPS;
use super::super::props;
use super::super::source::{GroupPhysics, ObjectInfo, SceneObject};
use super::{Emit, EmitContext, emit_all};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub info: ObjectInfo,
    #[serde(default)]
    pub children: Vec<SceneObject>,
    #[serde(default)]
    pub physics: GroupPhysics,
}

impl Emit for Group {
    fn emit(&self, cx: &EmitContext<'_>) -> Vec<String> {
        let var = self.info.name.as_str();

        let mut args = Vec::with_capacity(2);
        let factory = if self.physics.physics_group {
            args.push(self.physics.body_type.phaser_name().to_string());
            "physicsGroup"
        } else {
            "group"
        };
        args.push(cx.parent_ref().to_string());

        let mut lines = vec![format!("var {var} = {};", cx.factory(factory, &args))];
        lines.extend(props::transform(var, &self.info.transform, true));
        lines.extend(props::assignments(var, "", &self.physics, GROUP_PROPS));

        let children = emit_all(&self.children, &cx.within(self));
        if !children.is_empty() {
            lines.push(String::new());
            lines.extend(children);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::source::Transform;
    use crate::types::{PhysicsType, SceneKind, SortDirection, TextureRef};
    use crate::codegen::objects::Sprite;

    fn image(name: &str) -> SceneObject {
        SceneObject::Image(Sprite {
            info: ObjectInfo::named(name),
            texture: TextureRef::Image { key: name.into() },
            sprite: Default::default(),
        })
    }

    #[test]
    fn plain_group_in_world() {
        let g = Group {
            info: ObjectInfo::named("items"),
            children: Vec::new(),
            physics: GroupPhysics::default(),
        };
        assert_eq!(
            g.emit(&EmitContext::world(SceneKind::Group)),
            ["var items = this.game.add.group(this);"]
        );
        assert_eq!(
            g.emit(&EmitContext::world(SceneKind::State)),
            ["var items = this.add.group(this);"]
        );
    }

    #[test]
    fn physics_group_with_props_and_children() {
        let mut info = ObjectInfo::named("enemies");
        info.transform = Transform {
            x: 100.0,
            y: 50.0,
            ..Default::default()
        };
        let g = Group {
            info,
            children: vec![image("a"), image("b")],
            physics: GroupPhysics {
                physics_group: true,
                body_type: PhysicsType::Arcade,
                sort_direction: SortDirection::LeftRight,
            },
        };
        assert_eq!(
            g.emit(&EmitContext::world(SceneKind::Group)),
            [
                "var enemies = this.game.add.physicsGroup(Phaser.Physics.ARCADE, this);",
                "enemies.position.setTo(100, 50);",
                "enemies.physicsSortDirection = Phaser.Physics.Arcade.LEFT_RIGHT;",
                "",
                "this.game.add.sprite(0, 0, 'a', null, enemies);",
                "",
                "this.game.add.sprite(0, 0, 'b', null, enemies);",
            ]
        );
    }

    #[test]
    fn skipped_children_leave_no_gap() {
        let mut hidden = image("hidden");
        if let SceneObject::Image(s) = &mut hidden {
            s.info.generate_code = false;
        }
        let g = Group {
            info: ObjectInfo::named("g"),
            children: vec![image("a"), hidden, image("b")],
            physics: GroupPhysics::default(),
        };
        let lines = g.emit(&EmitContext::world(SceneKind::Group));
        assert_eq!(lines.iter().filter(|l| l.is_empty()).count(), 2);
        assert!(!lines.iter().any(|l| l.contains("hidden")));
    }

    #[test]
    fn nested_group_uses_parent_variable() {
        let inner = Group {
            info: ObjectInfo::named("inner"),
            children: vec![image("leaf")],
            physics: GroupPhysics::default(),
        };
        let outer = Group {
            info: ObjectInfo::named("outer"),
            children: vec![SceneObject::Group(inner)],
            physics: GroupPhysics::default(),
        };
        assert_eq!(
            outer.emit(&EmitContext::world(SceneKind::State)),
            [
                "var outer = this.add.group(this);",
                "",
                "var inner = this.add.group(outer);",
                "",
                "this.add.sprite(0, 0, 'leaf');",
            ]
        );
    }
}
