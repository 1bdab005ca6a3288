//! Saving converted artifacts to disk.
//!
//! Stands in for a browser download: the user picks a destination in a native
//! save dialog pre-filled with the artifact name, then the bytes are written.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use wordconv::Artifact;

pub struct ArtifactSaver;

impl ArtifactSaver {
    /// Asks for a destination and writes the artifact there.
    ///
    /// Returns `Ok(None)` if the dialog was dismissed.
    pub fn save_with_dialog(artifact: &Artifact, start_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
        let mut dialog = rfd::FileDialog::new().set_file_name(artifact.file_name());
        if let Some(extension) = Path::new(artifact.file_name()).extension().and_then(|e| e.to_str()) {
            dialog = dialog.add_filter(extension.to_uppercase(), &[extension]);
        }
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }

        match dialog.save_file() {
            Some(path) => Self::save_to(artifact, &path).map(Some),
            None => Ok(None),
        }
    }

    /// Writes the artifact to `path`.
    pub fn save_to(artifact: &Artifact, path: &Path) -> Result<PathBuf> {
        artifact
            .write_to_path(path)
            .with_context(|| format!("could not save {}", artifact.file_name()))?;
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordconv::{PLACEHOLDER_MIME, PLACEHOLDER_PAYLOAD};

    #[test]
    fn test_save_to_writes_payload() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = Artifact::new("final-essay.pdf", PLACEHOLDER_PAYLOAD.to_vec(), PLACEHOLDER_MIME);
        let target = dir.path().join("renamed.pdf");

        let saved = ArtifactSaver::save_to(&artifact, &target).unwrap();
        assert_eq!(saved, target);
        assert_eq!(std::fs::read(&target).unwrap(), PLACEHOLDER_PAYLOAD);
    }

    #[test]
    fn test_save_to_reports_context() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = Artifact::new("x.txt", Vec::new(), PLACEHOLDER_MIME);
        let err = ArtifactSaver::save_to(&artifact, &dir.path().join("missing/x.txt")).unwrap_err();
        assert!(format!("{:#}", err).starts_with("could not save x.txt"));
    }
}
