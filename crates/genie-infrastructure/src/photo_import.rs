//! Local image files to photo-set references.
//!
//! The scrapbook only ever sees opaque image references. Local files are
//! turned into `file://` URLs; anything that is not an image is skipped.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use genie_core::GenieError;
use genie_core::scrapbook::PhotoSet;

/// Infers the MIME type from a filename extension using the `mime_guess` library.
fn infer_mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Why a selected file did not make it into the photo set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Missing,
    NotAFile,
    NotAnImage { mime: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "file not found"),
            SkipReason::NotAFile => write!(f, "not a regular file"),
            SkipReason::NotAnImage { mime } => write!(f, "not an image ({})", mime),
        }
    }
}

/// Result of importing a selection of local files.
#[derive(Debug, Clone, Default)]
pub struct PhotoImport {
    pub refs: Vec<String>,
    pub skipped: Vec<(PathBuf, SkipReason)>,
}

impl PhotoImport {
    /// Converts the accepted references into a photo set, preserving order.
    pub fn into_photo_set(self) -> PhotoSet {
        PhotoSet::new(self.refs)
    }
}

/// Imports local image files in selection order.
///
/// Missing files and non-images are reported in [`PhotoImport::skipped`];
/// only unexpected I/O failures abort the import.
pub async fn import_photos<P: AsRef<Path>>(paths: &[P]) -> Result<PhotoImport, GenieError> {
    let mut import = PhotoImport::default();

    for path in paths {
        let path = path.as_ref();
        match classify(path).await? {
            Ok(image_ref) => import.refs.push(image_ref),
            Err(reason) => {
                tracing::warn!(
                    target: "genie::photos",
                    path = %path.display(),
                    %reason,
                    "Skipping selected file"
                );
                import.skipped.push((path.to_path_buf(), reason));
            }
        }
    }

    tracing::debug!(
        target: "genie::photos",
        accepted = import.refs.len(),
        skipped = import.skipped.len(),
        "Imported photos"
    );
    Ok(import)
}

async fn classify(path: &Path) -> Result<Result<String, SkipReason>, GenieError> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Err(SkipReason::Missing)),
        Err(e) => return Err(e.into()),
    };
    if !metadata.is_file() {
        return Ok(Err(SkipReason::NotAFile));
    }

    let mime = infer_mime_type(path);
    if !mime.starts_with("image/") {
        return Ok(Err(SkipReason::NotAnImage { mime }));
    }

    let absolute = tokio::fs::canonicalize(path).await?;
    Ok(Ok(format!("file://{}", absolute.display())))
}
