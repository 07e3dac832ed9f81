use canvas_codegen::codegen::Generator;
use canvas_codegen::codegen::regions::{PRE_INIT_BEGIN, PRE_INIT_END};
use canvas_codegen::codegen::source::SceneModel;
use canvas_codegen::config::GeneratorConfig;
use canvas_codegen::output::{self, Outcome};

fn generator() -> Generator {
    Generator::new(GeneratorConfig {
        product_name: "canvas-codegen test".into(),
        ..Default::default()
    })
}

fn hero_scene() -> SceneModel {
    SceneModel::from_json(
        r#"{
        "settings": { "class_name": "Level", "kind": "group" },
        "world": [
            {
                "type": "image",
                "info": {
                    "name": "hero",
                    "public": true,
                    "transform": { "x": 10, "y": 20, "angle": 45 }
                },
                "texture": { "type": "image", "key": "heroKey" },
                "sprite": {
                    "body": {
                        "type": "arcade_rect",
                        "width": 32,
                        "height": 32,
                        "arcade": { "collide_world_bounds": true }
                    }
                }
            }
        ]
    }"#,
    )
    .unwrap()
}

fn layered_scene() -> SceneModel {
    SceneModel::from_json(
        r#"{
        "settings": { "class_name": "Level" },
        "world": [
            { "type": "tile_sprite", "info": { "name": "sky" },
              "texture": { "type": "image", "key": "sky" }, "width": 800, "height": 600 },
            { "type": "group", "info": { "name": "enemies" },
              "physics": { "physics_group": true, "body_type": "arcade" },
              "children": [
                { "type": "spritesheet", "info": { "name": "bat", "public": true },
                  "texture": { "type": "spritesheet_frame", "key": "bat", "index": 0 },
                  "sprite": {
                    "animations": [ { "name": "fly", "frames": [0, 1, 2], "frame_rate": 8,
                                      "looping": true, "public": true } ],
                    "body": { "type": "arcade_circle", "radius": 10 }
                  } }
              ] },
            { "type": "group", "info": { "name": "hidden", "generate_code": false },
              "children": [
                { "type": "image", "info": { "name": "ghost", "public": true },
                  "texture": { "type": "image", "key": "ghost" } }
              ] }
        ]
    }"#,
    )
    .unwrap()
}

#[test]
fn hero_scene_matches_expected_file() {
    let out = generator().generate(&hero_scene(), None);
    let expected = [
        "// Generated by canvas-codegen test",
        "",
        "/**",
        " * Level.",
        " * @param {Phaser.Game} aGame A reference to the currently running game.",
        " * @param {Phaser.Group} aParent The parent Group (or other {@link DisplayObject}) that this group will be added to.",
        " * @param {string} aName A name for this group. Not used internally but useful for debugging.",
        " * @param {boolean} aAddToStage If true this group will be added directly to the Game.Stage instead of Game.World.",
        " * @param {boolean} aEnableBody If true all Sprites created with {@link #create} will have a physics body created on them.",
        " * @param {number} aPhysicsBodyType The physics body type to use when physics bodies are automatically added.",
        " */",
        "function Level(aGame, aParent, aName, aAddToStage, aEnableBody, aPhysicsBodyType) {",
        "",
        "\tPhaser.Group.call(this, aGame, aParent, aName, aAddToStage, aEnableBody, aPhysicsBodyType);",
        "\t/* --- pre-init-begin --- */",
        "\t// -- user code here --",
        "\t/* --- pre-init-end --- */",
        "",
        "\tvar hero = this.game.add.sprite(10, 20, 'heroKey', null, this);",
        "\thero.angle = 45;",
        "\tthis.game.physics.arcade.enable(hero);",
        "\thero.body.setSize(32, 32);",
        "\thero.body.collideWorldBounds = true;",
        "",
        "\t// public fields",
        "",
        "\tthis.fHero = hero;",
        "",
        "\t/* --- post-init-begin --- */",
        "\t// -- user code here --",
        "\t/* --- post-init-end --- */",
        "}",
        "",
        "/** @type Phaser.Group */",
        "var Level_proto = Object.create(Phaser.Group.prototype);",
        "Level.prototype = Level_proto;",
        "Level.prototype.constructor = Level;",
        "",
        "/* --- end generated code --- */",
        "// -- user code here --",
        "",
    ]
    .join("\n");
    assert_eq!(out, expected);
}

#[test]
fn regenerating_from_own_output_is_identical() {
    let generator = generator();
    for model in [hero_scene(), layered_scene()] {
        let first = generator.generate(&model, None);
        let second = generator.generate(&model, Some(&first));
        assert_eq!(first, second);
    }
}

#[test]
fn edited_pre_init_region_survives_regeneration() {
    let generator = generator();
    let first = generator.generate(&hero_scene(), None);

    let start = first.find(PRE_INIT_BEGIN).unwrap() + PRE_INIT_BEGIN.len();
    let end = first.find(PRE_INIT_END).unwrap();
    let user_code = "\n\tthis.score = 0;\n\tthis.lives = 3;\n\t";
    let edited = format!("{}{user_code}{}", &first[..start], &first[end..]);

    let second = generator.generate(&hero_scene(), Some(&edited));
    assert!(second.contains(&format!("{PRE_INIT_BEGIN}{user_code}{PRE_INIT_END}")));
    assert_eq!(second, edited);
    // Other regions keep their placeholders.
    assert!(second.contains("/* --- post-init-begin --- */\n\t// -- user code here --\n\t/* --- post-init-end --- */"));
    assert!(second.ends_with("/* --- end generated code --- */\n// -- user code here --\n"));
}

#[test]
fn trailing_code_survives_model_changes() {
    let generator = generator();
    let first = generator.generate(&hero_scene(), None);
    let edited = format!("{first}\nLevel.prototype.update = function () {{}};\n");

    let mut changed = hero_scene();
    changed.world[0] = layered_scene().world[0].clone();
    let second = generator.generate(&changed, Some(&edited));

    assert!(second.contains("this.game.add.tileSprite(0, 0, 800, 600, 'sky', null, this);"));
    assert!(!second.contains("hero"));
    assert!(second.ends_with("// -- user code here --\n\nLevel.prototype.update = function () {};\n"));
}

#[test]
fn disabled_group_drops_its_whole_subtree() {
    let out = generator().generate(&layered_scene(), None);
    assert!(!out.contains("hidden"));
    assert!(!out.contains("ghost"));
    assert!(!out.contains("fGhost"));
}

#[test]
fn physics_group_members_and_public_animations() {
    let out = generator().generate(&layered_scene(), None);
    let block = [
        "\tvar enemies = this.game.add.physicsGroup(Phaser.Physics.ARCADE, this);",
        "",
        "\tvar bat = this.game.add.sprite(0, 0, 'bat', 0, enemies);",
        "\tvar bat_fly = bat.animations.add('fly', [0, 1, 2], 8, true);",
        "\tbat.body.setCircle(10);",
    ]
    .join("\n");
    assert!(out.contains(&block), "{out}");
    assert!(!out.contains("arcade.enable(bat)"));
    assert!(out.contains("\t// public fields\n\n\tthis.fBat = bat;\n\tthis.fBat_fly = bat_fly;\n\n"));
}

#[test]
fn top_level_objects_are_blank_line_separated() {
    let out = generator().generate(&layered_scene(), None);
    assert!(out.contains(
        "\tthis.game.add.tileSprite(0, 0, 800, 600, 'sky', null, this);\n\n\tvar enemies ="
    ));
}

#[test]
fn state_scene_uses_state_factories() {
    let mut model = layered_scene();
    model.settings.kind = canvas_codegen::types::SceneKind::State;
    let out = generator().generate(&model, None);
    assert!(out.contains("Level.prototype.create = function () {"));
    assert!(out.contains("\tthis.add.tileSprite(0, 0, 800, 600, 'sky');"));
    assert!(out.contains("\tvar enemies = this.add.physicsGroup(Phaser.Physics.ARCADE, this);"));
    assert!(out.contains("\tvar bat = this.add.sprite(0, 0, 'bat', 0);"));
    assert_eq!(out, generator().generate(&model, Some(&out)));
}

#[test]
fn state_scene_group_keeps_parent_and_members_drop_it() {
    let model = SceneModel::from_json(
        r#"{
        "settings": { "class_name": "Play", "kind": "state" },
        "world": [
            { "type": "group", "info": { "name": "g" },
              "children": [
                { "type": "image", "info": { "name": "s" },
                  "texture": { "type": "image", "key": "k" } }
              ] }
        ]
    }"#,
    )
    .unwrap();
    let out = generator().generate(&model, None);
    assert!(out.contains("\tvar g = this.add.group(this);\n\n\tthis.add.sprite(0, 0, 'k');\n"), "{out}");
}

#[test]
fn regenerate_file_reports_outcome() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("Level.js");
    let generator = generator();

    assert_eq!(output::regenerate(&generator, &hero_scene(), &path)?, Outcome::Created);
    assert_eq!(output::regenerate(&generator, &hero_scene(), &path)?, Outcome::Unchanged);

    let text = std::fs::read_to_string(&path)?;
    std::fs::write(&path, text.replace("// -- user code here --\n", "console.log('mine');\n"))?;

    assert_eq!(output::regenerate(&generator, &layered_scene(), &path)?, Outcome::Updated);
    let text = std::fs::read_to_string(&path)?;
    assert!(text.ends_with("/* --- end generated code --- */\nconsole.log('mine');\n"));
    assert!(text.contains("'bat'"));
    Ok(())
}
