//! Codegen: the scene-to-script compiler.
//!
//! Turns a `SceneModel` (what the editor holds) into the text of one script
//! file that rebuilds the scene with the Phaser API.
//!
//! Generation is a pure function of the model, the configuration and the
//! previously generated text. It never touches the filesystem.

pub mod defaults;
pub mod dialect;
pub mod naming;
pub mod objects;
pub mod props;
pub mod regions;
pub mod source;

use std::fmt::Write;

use log::info;

use crate::config::GeneratorConfig;
use naming::{animation_var_name, public_field_name};
use objects::{EmitContext, emit_all};
use regions::extract_regions;
use source::{SceneModel, SceneObject};

pub struct Generator {
    config: GeneratorConfig,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(GeneratorConfig::default())
    }
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    /// Generate the script for `model`, carrying over the editable regions of
    /// `previous` (the last generated text, if any).
    pub fn generate(&self, model: &SceneModel, previous: Option<&str>) -> String {
        let indent = self.config.indent.as_str();
        let regions = extract_regions(
            previous,
            &self.config.body_placeholder(),
            &self.config.trailing_placeholder(),
        );

        let objects = emit_all(&model.world, &EmitContext::world(model.settings.kind));
        let fields = public_fields(model);

        info!(
            "generating {} ({} statements, {} public fields)",
            model.settings.class_name,
            objects.iter().filter(|l| !l.is_empty()).count(),
            fields.len()
        );

        let mut out = String::new();
        let _ = writeln!(out, "// Generated by {}", self.config.product_name);
        out.push('\n');
        out.push_str(&dialect::header(&model.settings, indent, &regions.pre_init));

        write_block(&mut out, indent, &objects);
        out.push('\n');

        if !fields.is_empty() {
            let _ = writeln!(out, "{indent}// public fields");
            out.push('\n');
            write_block(&mut out, indent, &fields);
            out.push('\n');
        }

        out.push_str(&dialect::footer(
            &model.settings,
            indent,
            &regions.post_init,
            &regions.trailing,
        ));
        out
    }
}

/// `this.<field> = <var>;` for every public object and public animation.
///
/// Collected in a walk of its own so the assignments land after every
/// variable they reference, whatever the nesting depth.
pub fn public_fields(model: &SceneModel) -> Vec<String> {
    let mut fields = Vec::new();
    for obj in &model.world {
        collect_public_fields(obj, &mut fields);
    }
    fields
}

fn collect_public_fields(obj: &SceneObject, fields: &mut Vec<String>) {
    let info = obj.info();
    if !info.generate_code {
        return;
    }

    if info.public {
        fields.push(format!("this.{} = {};", public_field_name(&info.name), info.name));
    }

    if let Some(sprite) = obj.sprite() {
        for anim in sprite.animations.iter().filter(|a| a.public) {
            let var = animation_var_name(&info.name, &anim.name);
            fields.push(format!("this.{} = {var};", public_field_name(&var)));
        }
    }

    if let SceneObject::Group(group) = obj {
        for child in &group.children {
            collect_public_fields(child, fields);
        }
    }
}

fn write_block(out: &mut String, indent: &str, lines: &[String]) {
    for line in lines {
        if line.is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{indent}{line}");
        }
    }
}
