use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::error::Result;

/// File extensions treated as layer data when scanning a project folder.
pub const LAYER_EXTENSIONS: &[&str] = &[
    "shp", "gpkg", "geojson", "kml", "gml", "tab", "sqlite", "tif", "tiff", "vrt", "asc",
];

/// A styleable layer. The applier only ever reads the name and assigns a
/// stylesheet; it neither owns nor persists the layer itself.
pub trait Layer {
    fn name(&self) -> &str;

    /// Assign the given QML stylesheet to this layer.
    fn apply_style(&mut self, style: &Path) -> Result<()>;
}

/// A layer backed by a geodata file in a project folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderLayer {
    name: String,
    data_path: PathBuf,
}

impl FolderLayer {
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Path of the QML sidecar this layer's style is installed at.
    pub fn style_path(&self) -> PathBuf {
        self.data_path.with_extension("qml")
    }
}

impl Layer for FolderLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply_style(&mut self, style: &Path) -> Result<()> {
        // The host GIS application auto-loads `<stem>.qml` next to the data
        // file, so installing the sidecar is the style assignment.
        let sidecar = self.style_path();
        fs::copy(style, &sidecar)?;
        info!(
            "installed {} as {}",
            style.display(),
            sidecar.display()
        );
        Ok(())
    }
}

/// The set of layers found in a project folder, sorted by name.
pub struct FolderProject {
    root: PathBuf,
    layers: Vec<FolderLayer>,
}

impl FolderProject {
    /// Scan a folder for layer data files. Subdirectories are not descended
    /// into; a project folder is flat in the same way a host project's layer
    /// list is.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut layers = Vec::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !LAYER_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
            {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            layers.push(FolderLayer {
                name: stem.to_string(),
                data_path: path,
            });
        }

        layers.sort_by(|a, b| a.name.cmp(&b.name));
        info!("scanned {}: {} layer(s)", root.display(), layers.len());

        Ok(Self {
            root: root.to_path_buf(),
            layers,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layers(&self) -> &[FolderLayer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [FolderLayer] {
        &mut self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
