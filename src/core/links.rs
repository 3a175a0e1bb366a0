use super::candidates::PlotCandidate;
use crate::{
    constants::{
        BUTTON_LABEL_PLACEHOLDER, BUTTON_TEMPLATE, BUTTON_URI_PLACEHOLDER, JOIN_SEPARATOR,
        VIEW_COLUMN_INDEX,
    },
    error::SvlinkError,
    utils::util::Result,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// The two fields added to every report row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotLinks {
    pub view: String,
    pub local: String,
    pub n_found: usize,
}

impl PlotLinks {
    pub fn is_empty(&self) -> bool {
        self.n_found == 0
    }

    /// Inserts `view` as the second field and appends `local`, so the row always grows by two.
    pub fn splice_into(self, row: &mut Vec<String>) {
        let view_idx = VIEW_COLUMN_INDEX.min(row.len());
        row.insert(view_idx, self.view);
        row.push(self.local);
    }
}

/// Turns plot candidates into report links, keeping only plots present under the image root.
#[derive(Debug, Clone, Default)]
pub struct PlotLinker {
    image_root: Option<PathBuf>,
    embed: bool,
}

impl PlotLinker {
    pub fn new(image_root: Option<PathBuf>, embed: bool) -> Self {
        Self { image_root, embed }
    }

    pub fn image_root(&self) -> Option<&Path> {
        self.image_root.as_deref()
    }

    /// Location checked on disk; relative to the working directory without an image root.
    pub fn resolve(&self, candidate: &PlotCandidate) -> PathBuf {
        let relative = candidate.relative_path();
        match &self.image_root {
            Some(root) => root.join(relative),
            None => PathBuf::from(relative),
        }
    }

    pub fn existing(&self, candidates: Vec<PlotCandidate>) -> Vec<PlotCandidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                let path = self.resolve(candidate);
                let exists = path.exists();
                log::trace!("Plot {} exists: {}", path.display(), exists);
                exists
            })
            .collect()
    }

    pub fn link(&self, candidates: Vec<PlotCandidate>) -> Result<PlotLinks> {
        let found = self.existing(candidates);
        let mut buttons = Vec::with_capacity(found.len());
        let mut local = Vec::with_capacity(found.len());
        for candidate in &found {
            let relative = candidate.relative_path();
            let uri = if self.embed {
                self.embedded_uri(candidate)?
            } else {
                relative.clone()
            };
            buttons.push(render_button(&uri, candidate.label()));
            local.push(relative);
        }
        Ok(PlotLinks {
            view: buttons.join(JOIN_SEPARATOR),
            local: local.join(JOIN_SEPARATOR),
            n_found: found.len(),
        })
    }

    fn embedded_uri(&self, candidate: &PlotCandidate) -> Result<String> {
        let path = self.resolve(candidate);
        match to_data_url(&path) {
            Ok(url) => Ok(url),
            Err(SvlinkError::UnembeddableImage { path }) => {
                log::warn!(
                    "Cannot embed {}, linking to the file instead",
                    path.display()
                );
                Ok(candidate.relative_path())
            }
            Err(e) => Err(e),
        }
    }
}

pub fn render_button(uri: &str, label: &str) -> String {
    BUTTON_TEMPLATE
        .replace(BUTTON_URI_PLACEHOLDER, uri)
        .replace(BUTTON_LABEL_PLACEHOLDER, label)
}

/// Reads an image into a `data:image/<ext>;base64,...` URL. Browsers do not render PDFs from
/// data URLs, so those are rejected.
pub fn to_data_url(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();
    if ext.is_empty() || ext.eq_ignore_ascii_case("pdf") {
        return Err(SvlinkError::UnembeddableImage {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|e| {
        crate::svlink_error!("Failed to read image {}: {e}", path.display())
    })?;
    Ok(format!("data:image/{ext};base64,{}", STANDARD.encode(bytes)))
}
