//! Loader for the locomotion tuning RON file.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::data::LocomotionDef;
use crate::movement::LocomotionTuning;

/// Tuning file path relative to the working directory.
pub const TUNING_PATH: &str = "assets/data/locomotion.ron";

/// Error type for tuning loading failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning overrides from RON text.
pub fn parse_tuning(file: &str, contents: &str) -> Result<LocomotionTuning, TuningLoadError> {
    let def: LocomotionDef = ron_options()
        .from_str(contents)
        .map_err(|e| TuningLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    Ok(def.into_tuning())
}

/// Load tuning from `path`.
/// Returns `Ok(None)` when the file does not exist so callers can fall back to defaults.
pub fn load_tuning(path: &Path) -> Result<Option<LocomotionTuning>, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(TuningLoadError {
                file: file_name,
                message: format!("IO error: {}", e),
            });
        }
    };

    parse_tuning(&file_name, &contents).map(Some)
}

/// Load and validate tuning, logging every problem found.
pub fn load_validated_tuning(path: &Path) -> Result<LocomotionTuning, Vec<String>> {
    let tuning = match load_tuning(path) {
        Ok(Some(tuning)) => {
            info!("Loaded locomotion tuning from {}", path.display());
            tuning
        }
        Ok(None) => {
            warn!(
                "{} not found, using default locomotion tuning",
                path.display()
            );
            LocomotionTuning::default()
        }
        Err(e) => return Err(vec![e.to_string()]),
    };

    let errors = super::validate_tuning(&tuning);
    if errors.is_empty() {
        Ok(tuning)
    } else {
        Err(errors.iter().map(ToString::to_string).collect())
    }
}
