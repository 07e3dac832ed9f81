//! File-level regeneration: the only place that reads or writes the
//! generated script.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::codegen::Generator;
use crate::codegen::source::SceneModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
    Unchanged,
}

/// Regenerate `path` from `model`, keeping the editable regions of the file
/// already there. The file is only rewritten when its text changes.
pub fn regenerate(generator: &Generator, model: &SceneModel, path: &Path) -> Result<Outcome> {
    let previous = match fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    let text = generator.generate(model, previous.as_deref());
    let outcome = match previous {
        None => Outcome::Created,
        Some(prev) if prev == text => Outcome::Unchanged,
        Some(_) => Outcome::Updated,
    };

    if outcome != Outcome::Unchanged {
        fs::write(path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
    }
    debug!("{} -> {outcome:?}", path.display());
    Ok(outcome)
}
