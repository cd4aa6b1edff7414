//! # Upload Pipeline
//!
//! Pushes the locally picked files of an upload field to the server in one
//! request and fills in the URLs it returns.

use eyre::eyre;
use slotdesk_core::{errors::DeskResult, models::upload::UploadFile};
use tracing::{debug, info};

use crate::api::{FileApi, FilePart};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file still needs uploading when it is active, has local content and no
/// server URL yet.
pub fn needs_upload(file: &UploadFile) -> bool {
    file.is_active() && !file.has_remote_url() && file.content.is_some()
}

/// Uploads every pending file and returns the list with their URLs assigned.
///
/// The returned URLs are matched to the pending files by position. The call
/// is all-or-nothing: on any error `files` is left untouched and the caller
/// keeps its current list.
///
/// # Errors
///
/// * `DeskError::Api` - the request failed or the server returned a different
///   number of URLs than files sent
pub async fn upload_pending<A>(api: &A, files: &[UploadFile]) -> DeskResult<Vec<UploadFile>>
where
    A: FileApi + ?Sized,
{
    let pending: Vec<usize> = files
        .iter()
        .enumerate()
        .filter(|(_, file)| needs_upload(file))
        .map(|(position, _)| position)
        .collect();

    if pending.is_empty() {
        debug!("No files waiting for upload");
        return Ok(files.to_vec());
    }

    let parts: Vec<FilePart> = pending
        .iter()
        .map(|&position| {
            let file = &files[position];
            FilePart {
                name: file.name.clone(),
                mime_type: file
                    .effective_mime_type()
                    .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
                bytes: file.content.clone().unwrap_or_default(),
            }
        })
        .collect();

    let urls = api.upload_files(parts).await?;
    if urls.len() != pending.len() {
        return Err(eyre!(
            "Upload returned {} URL(s) for {} file(s)",
            urls.len(),
            pending.len()
        )
        .into());
    }

    let mut uploaded = files.to_vec();
    for (position, url) in pending.into_iter().zip(urls) {
        let file = &mut uploaded[position];
        file.file_url = Some(url);
        file.content = None;
    }

    info!(count = uploaded.iter().filter(|f| f.has_remote_url()).count(), "Upload field synced");
    Ok(uploaded)
}
