//! # Upload Reconciliation
//!
//! Keeps the list of attachments shown in an upload field consistent across
//! repeated selection changes without losing server identity.
//!
//! ## Algorithm
//!
//! For every new selection (`incoming`) against the displayed list
//! (`previous`):
//!
//! 1. Walk `previous`:
//!    - inactive entries are kept unchanged;
//!    - entries still present in `incoming` are kept unchanged;
//!    - missing entries with a server id are marked inactive;
//!    - missing entries without a server id are dropped.
//! 2. Append every active `incoming` file that is not yet represented.
//!
//! Two files are the same when both have ids and the ids match, or when
//! neither has an id and the names match. Inactive incoming files never count
//! as present and are never appended.
//!
//! An entry with a server id therefore only ever leaves the active subset by
//! becoming inactive.

use tracing::{debug, warn};

use crate::{
    errors::{DeskError, DeskResult},
    matching::match_identity,
    models::upload::{FileStatus, MediaKind, UploadFile},
};

/// Runs one reconciliation step. Pure; `previous` is not modified.
pub fn reconcile(previous: &[UploadFile], incoming: &[UploadFile]) -> Vec<UploadFile> {
    let mut result: Vec<UploadFile> = Vec::with_capacity(previous.len() + incoming.len());

    for file in previous {
        if file.is_inactive() {
            result.push(file.clone());
            continue;
        }

        let still_present = incoming
            .iter()
            .any(|candidate| candidate.is_active() && match_identity(file, candidate).is_match());

        if still_present {
            result.push(file.clone());
        } else if file.server_id().is_some() {
            debug!(file = %file.name, "Marking deselected server file inactive");
            result.push(file.clone().with_status(FileStatus::Inactive));
        }
    }

    for candidate in incoming.iter().filter(|candidate| candidate.is_active()) {
        let represented = result
            .iter()
            .any(|existing| match_identity(existing, candidate).is_match());
        if !represented {
            let mut added = candidate.clone();
            added.status = Some(FileStatus::Active);
            result.push(added);
        }
    }

    result
}

/// Per-category caps applied to the active files of a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_images: Option<usize>,
    pub max_videos: Option<usize>,
}

impl UploadLimits {
    /// # Errors
    ///
    /// * `DeskError::LimitExceeded` - the first category over its cap
    pub fn check(&self, files: &[UploadFile]) -> DeskResult<()> {
        let count = |kind: MediaKind| {
            files
                .iter()
                .filter(|file| file.is_active() && file.media_kind() == Some(kind))
                .count()
        };

        for (kind, max) in [
            (MediaKind::Image, self.max_images),
            (MediaKind::Video, self.max_videos),
        ] {
            let Some(max) = max else { continue };
            let actual = count(kind);
            if actual > max {
                return Err(DeskError::LimitExceeded { kind, max, actual });
            }
        }

        Ok(())
    }
}

/// The value an upload field hands to its form: one file or a list,
/// depending on how the field was declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Single(Option<UploadFile>),
    Multiple(Vec<UploadFile>),
}

impl FieldValue {
    /// Every file carried by the value, inactive ones included.
    pub fn files(&self) -> Vec<UploadFile> {
        match self {
            FieldValue::Single(file) => file.iter().cloned().collect(),
            FieldValue::Multiple(files) => files.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadFieldConfig {
    pub multiple: bool,
    pub limits: UploadLimits,
}

/// Stateful owner of the displayed file list of one upload field.
#[derive(Debug, Clone)]
pub struct UploadField {
    config: UploadFieldConfig,
    displayed: Vec<UploadFile>,
}

impl UploadField {
    pub fn new(config: UploadFieldConfig) -> Self {
        Self {
            config,
            displayed: Vec::new(),
        }
    }

    /// Starts from the files the server already holds for this field.
    pub fn with_files(config: UploadFieldConfig, files: Vec<UploadFile>) -> Self {
        Self {
            config,
            displayed: files,
        }
    }

    pub fn config(&self) -> &UploadFieldConfig {
        &self.config
    }

    pub fn displayed(&self) -> &[UploadFile] {
        &self.displayed
    }

    pub fn active_files(&self) -> impl Iterator<Item = &UploadFile> {
        self.displayed.iter().filter(|file| file.is_active())
    }

    /// Applies a new raw selection.
    ///
    /// In single mode only the last active incoming file is considered.
    ///
    /// # Errors
    ///
    /// * `DeskError::LimitExceeded` - the result breaks a category limit; the
    ///   displayed list is left as it was
    pub fn select(&mut self, incoming: &[UploadFile]) -> DeskResult<FieldValue> {
        let incoming: Vec<UploadFile> = if self.config.multiple {
            incoming.to_vec()
        } else {
            incoming
                .iter()
                .rev()
                .find(|file| file.is_active())
                .cloned()
                .into_iter()
                .collect()
        };

        let next = reconcile(&self.displayed, &incoming);
        if let Err(err) = self.config.limits.check(&next) {
            warn!(error = %err, "Rejected upload selection");
            return Err(err);
        }

        self.displayed = next;
        Ok(self.value())
    }

    /// Replaces the displayed list wholesale, e.g. after an upload assigned URLs.
    pub fn replace(&mut self, files: Vec<UploadFile>) {
        self.displayed = files;
    }

    /// Current value in the shape the form expects.
    pub fn value(&self) -> FieldValue {
        if self.config.multiple {
            FieldValue::Multiple(self.displayed.clone())
        } else {
            FieldValue::Single(self.active_files().last().cloned())
        }
    }
}
