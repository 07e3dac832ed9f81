use std::{fs, path::Path, process};

use anyhow::{Context, Result, bail};
use crossterm::style::Stylize;

use canvas_codegen::{
    codegen::{Generator, regions::extract_regions, source::SceneModel},
    config::GeneratorConfig,
    output::{self, Outcome},
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("{} {e:#}", "Error:".red().bold());
        process::exit(1);
    }
}

const GENERATE_USAGE: &str = "canvas-codegen generate <scene.json> <output.js>";
const PRINT_USAGE: &str = "canvas-codegen print <scene.json>";
const REGIONS_USAGE: &str = "canvas-codegen regions <output.js>";

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    match args.next().as_deref() {
        Some("generate") => {
            let scene_path = args.next().context(GENERATE_USAGE)?;
            let output_path = args.next().context(GENERATE_USAGE)?;
            generate(&scene_path, &output_path)
        }
        Some("print") => {
            let scene_path = args.next().context(PRINT_USAGE)?;
            print(&scene_path)
        }
        Some("regions") => {
            let path = args.next().context(REGIONS_USAGE)?;
            regions(&path)
        }
        _ => bail!(
            "canvas-codegen: scene model to Phaser script generator\n\nUsage:\n  {GENERATE_USAGE}\n  {PRINT_USAGE}\n  {REGIONS_USAGE}"
        ),
    }
}

fn generate(scene_path: &str, output_path: &str) -> Result<()> {
    let model = SceneModel::load(scene_path)?;
    let generator = Generator::new(GeneratorConfig::load());

    let outcome = output::regenerate(&generator, &model, Path::new(output_path))?;
    let status = match outcome {
        Outcome::Created => "Created".green().bold(),
        Outcome::Updated => "Updated".green().bold(),
        Outcome::Unchanged => "Unchanged".dim(),
    };
    eprintln!(
        "{status} {} ({} top-level objects) {} -> {}",
        model.settings.class_name,
        model.world.len(),
        scene_path,
        output_path,
    );

    Ok(())
}

fn print(scene_path: &str) -> Result<()> {
    let model = SceneModel::load(scene_path)?;
    let generator = Generator::new(GeneratorConfig::load());
    print!("{}", generator.generate(&model, None));
    Ok(())
}

fn regions(path: &str) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let config = GeneratorConfig::load();
    let regions = extract_regions(
        Some(&text),
        &config.body_placeholder(),
        &config.trailing_placeholder(),
    );

    for (name, body) in [
        ("pre-init", &regions.pre_init),
        ("post-init", &regions.post_init),
        ("trailing", &regions.trailing),
    ] {
        println!("{}", format!("── {name} ──").cyan().bold());
        println!("{}", body.trim_matches('\n'));
    }
    Ok(())
}
