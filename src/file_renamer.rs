//! Rename planning and execution.
//!
//! This module turns an input path into a [`RenamePlan`] and carries the plan
//! out on disk. Planning never touches the filesystem beyond checking that the
//! path is a regular file; applying a plan is a single `rename` call.

use crate::error::{RenameError, RenameResult};
use crate::reconstruct::reconstruct;
use crate::shape::{FilenameShape, ShapeClassifier};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An input path split into the parts the reconstructor works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// The directory holding the file; empty for a bare file name.
    pub directory: PathBuf,
    /// The file name without its final extension.
    pub base_name: String,
    /// The final extension without the dot, in its original case.
    pub extension: String,
    /// The shape the full file name was classified as.
    pub shape: FilenameShape,
}

impl ParsedFilename {
    /// Splits `path` and classifies its file name.
    ///
    /// Returns `None` when the path has no file name or the name is not
    /// valid UTF-8.
    pub fn from_path(path: &Path, classifier: &ShapeClassifier) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let base_name = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name)
            .to_string();
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_string();

        Some(Self {
            directory,
            base_name,
            extension,
            shape: classifier.classify(file_name),
        })
    }

    /// The file name this was parsed from.
    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.base_name.clone()
        } else {
            format!("{}.{}", self.base_name, self.extension)
        }
    }
}

/// Why a path was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The path does not exist or is a directory, socket, etc.
    NotARegularFile,
    /// The file name matches none of the known shapes.
    UnrecognizedFilename,
    /// The file name is not valid UTF-8 and cannot be classified.
    NonUtf8Name,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotARegularFile => "not a regular file",
            SkipReason::UnrecognizedFilename => "unknown file name format",
            SkipReason::NonUtf8Name => "file name is not valid UTF-8",
        };
        f.write_str(text)
    }
}

/// What to do with one input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenamePlan {
    /// Rename `source` to `target`, which lives in the same directory.
    Rename {
        source: PathBuf,
        target: PathBuf,
        shape: FilenameShape,
    },
    /// Leave `path` untouched.
    Skip { path: PathBuf, reason: SkipReason },
}

impl RenamePlan {
    /// The new file name, if this plan renames anything.
    pub fn target_name(&self) -> Option<String> {
        match self {
            RenamePlan::Rename { target, .. } => target
                .file_name()
                .map(|name| name.to_string_lossy().to_string()),
            RenamePlan::Skip { .. } => None,
        }
    }
}

/// Plans and applies renames.
pub struct FileRenamer;

impl FileRenamer {
    /// Decides what to do with `path`.
    ///
    /// Non-files and unrecognized names become [`RenamePlan::Skip`]; a
    /// recognized name becomes [`RenamePlan::Rename`] with the target in the
    /// same directory as the source.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::MalformedMatch`] when a recognized name cannot
    /// be taken apart by its shape's field rule.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use magrename::file_renamer::{FileRenamer, RenamePlan};
    /// use magrename::shape::ShapeClassifier;
    /// use std::path::Path;
    ///
    /// let classifier = ShapeClassifier::new();
    /// let plan = FileRenamer::plan(Path::new("/mags/07_Spectrum_2021.pdf"), &classifier).unwrap();
    /// if let RenamePlan::Rename { target, .. } = plan {
    ///     println!("Would rename to {}", target.display());
    /// }
    /// ```
    pub fn plan(path: &Path, classifier: &ShapeClassifier) -> RenameResult<RenamePlan> {
        debug!("Working on file {}.", path.display());

        if !path.is_file() {
            info!("Path {} is not a file, skipping.", path.display());
            return Ok(Self::skip(path, SkipReason::NotARegularFile));
        }

        let Some(parsed) = ParsedFilename::from_path(path, classifier) else {
            info!("{} has a name that is not valid UTF-8, skipping.", path.display());
            return Ok(Self::skip(path, SkipReason::NonUtf8Name));
        };

        debug!(
            "File '{}' is located at '{}'.",
            parsed.file_name(),
            parsed.directory.display()
        );
        debug!(
            "File name is '{}', with extension '{}'.",
            parsed.base_name, parsed.extension
        );

        if !parsed.shape.is_recognized() {
            info!("{} is an unknown file, skipping.", parsed.file_name());
            return Ok(Self::skip(path, SkipReason::UnrecognizedFilename));
        }

        info!(
            "{} is an {}.",
            parsed.file_name(),
            parsed.shape.description()
        );

        let new_name = reconstruct(parsed.shape, &parsed.base_name, &parsed.extension)?;
        info!("File will be renamed to '{}'.", new_name);

        Ok(RenamePlan::Rename {
            source: path.to_path_buf(),
            target: parsed.directory.join(new_name),
            shape: parsed.shape,
        })
    }

    /// Carries out a plan. Skips are a no-op.
    ///
    /// An existing file at the target is never overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::TargetExists`] if the target is already taken and
    /// [`RenameError::Filesystem`] if the rename itself fails.
    pub fn apply(plan: &RenamePlan) -> RenameResult<()> {
        let RenamePlan::Rename { source, target, .. } = plan else {
            return Ok(());
        };

        if target.exists() {
            return Err(RenameError::TargetExists {
                from: source.clone(),
                to: target.clone(),
            });
        }

        fs::rename(source, target).map_err(|error| RenameError::Filesystem {
            from: source.clone(),
            to: target.clone(),
            error,
        })?;

        debug!("Renamed {} to {}.", source.display(), target.display());
        Ok(())
    }

    fn skip(path: &Path, reason: SkipReason) -> RenamePlan {
        RenamePlan::Skip {
            path: path.to_path_buf(),
            reason,
        }
    }
}
