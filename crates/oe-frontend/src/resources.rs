//! Application-wide resource cache
//!
//! Resources live in a single directory. An optional `resources.ini`
//! manifest maps logical names to files (`logo = images/logo.png`); names
//! missing from the manifest are looked up as plain file names. File contents
//! are read once and shared afterwards.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use oe_text::{ParsedAssignment, Size};
use oe_vfs::FileStream;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, warn};

/// Manifest file name inside the resources directory
pub const MANIFEST_FILE: &str = "resources.ini";

/// Resource lookup errors
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("Invalid resource name: {0:?}")]
    InvalidName(String),

    #[error("Failed to load resource {name} from {}: {source}", .path.display())]
    Load {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Cached frontend resources
#[derive(Debug)]
pub struct AppResources {
    root: PathBuf,
    icon_size: Size,
    manifest: HashMap<String, PathBuf>,
    assets: RwLock<HashMap<String, Arc<[u8]>>>,
}

impl AppResources {
    /// Create the cache for `root`, reading its manifest if there is one
    pub fn new(root: impl Into<PathBuf>, icon_size: Size) -> Self {
        let root = root.into();
        let manifest_path = root.join(MANIFEST_FILE);

        let manifest = if manifest_path.is_file() {
            match FileStream::open(&manifest_path, "r").and_then(|mut f| f.read_all()) {
                Ok(text) => Self::parse_manifest(&text),
                Err(e) => {
                    warn!("Ignoring unreadable {}: {}", manifest_path.display(), e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        debug!(
            "Resource cache at {} ({} manifest entries)",
            root.display(),
            manifest.len()
        );

        Self {
            root,
            icon_size,
            manifest,
            assets: RwLock::new(HashMap::new()),
        }
    }

    /// Parse `name = file` lines; comments and incomplete lines are skipped
    pub fn parse_manifest(text: &str) -> HashMap<String, PathBuf> {
        let mut entries = HashMap::new();

        for (number, line) in text.lines().enumerate() {
            let entry = ParsedAssignment::new(line);
            if entry.is_comment || (entry.lvalue.is_empty() && entry.rvalue.is_empty()) {
                continue;
            }
            if entry.lvalue.is_empty() || entry.rvalue.is_empty() {
                warn!("{} line {}: expected `name = file`", MANIFEST_FILE, number + 1);
                continue;
            }
            entries.insert(entry.lvalue, PathBuf::from(entry.rvalue));
        }

        entries
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Toolbar icon size the frontend renders resources at
    pub fn icon_size(&self) -> Size {
        self.icon_size
    }

    /// Names declared in the manifest, sorted
    pub fn manifest_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.manifest.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// File backing a resource name
    pub fn path_of(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let relative = match self.manifest.get(name) {
            Some(file) => file.as_path(),
            None => Path::new(name),
        };

        let escapes_root = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || escapes_root {
            return Err(ResourceError::InvalidName(name.to_string()));
        }

        Ok(self.root.join(relative))
    }

    /// Contents of a resource, loaded on first request
    pub fn asset(&self, name: &str) -> Result<Arc<[u8]>, ResourceError> {
        if let Some(data) = self.assets.read().get(name) {
            return Ok(Arc::clone(data));
        }

        let path = self.path_of(name)?;
        let data: Arc<[u8]> = FileStream::open(&path, "rb")
            .and_then(|mut stream| stream.read_all_bytes())
            .map_err(|source| ResourceError::Load {
                name: name.to_string(),
                path: path.clone(),
                source,
            })?
            .into();
        debug!("Loaded resource {} ({} bytes)", name, data.len());

        // Another thread may have loaded it meanwhile; keep the first copy
        let mut assets = self.assets.write();
        Ok(Arc::clone(assets.entry(name.to_string()).or_insert(data)))
    }

    /// Number of resources held in memory
    pub fn cached_len(&self) -> usize {
        self.assets.read().len()
    }

    /// Drop every cached resource
    pub fn clear(&self) {
        self.assets.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("images")).unwrap();
        std::fs::write(temp.path().join("images/logo.png"), b"PNGDATA").unwrap();
        std::fs::write(temp.path().join("about.txt"), b"about").unwrap();
        std::fs::write(
            temp.path().join(MANIFEST_FILE),
            "; frontend resources\nlogo = images/logo.png\nbroken =\n",
        )
        .unwrap();
        temp
    }

    #[test]
    fn test_parse_manifest() {
        let manifest = AppResources::parse_manifest(
            "-- header\n\nicon=icons/app.png\n = orphan\n// x = y\nsplash = splash.png\n",
        );
        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest["icon"], PathBuf::from("icons/app.png"));
        assert_eq!(manifest["splash"], PathBuf::from("splash.png"));
    }

    #[test]
    fn test_manifest_lookup_and_caching() {
        let temp = setup();
        let resources = AppResources::new(temp.path(), Size::new(32, 32));
        assert_eq!(resources.manifest_names(), vec!["logo"]);

        let first = resources.asset("logo").unwrap();
        assert_eq!(&*first, b"PNGDATA");
        assert_eq!(resources.cached_len(), 1);

        // Served from memory even after the file is gone
        std::fs::remove_file(temp.path().join("images/logo.png")).unwrap();
        let second = resources.asset("logo").unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        resources.clear();
        assert_eq!(resources.cached_len(), 0);
        assert!(matches!(resources.asset("logo"), Err(ResourceError::Load { .. })));
    }

    #[test]
    fn test_plain_file_fallback() {
        let temp = setup();
        let resources = AppResources::new(temp.path(), Size::new(16, 16));
        assert_eq!(&*resources.asset("about.txt").unwrap(), b"about");
        assert_eq!(resources.icon_size(), Size::new(16, 16));
    }

    #[test]
    fn test_rejects_names_outside_root() {
        let temp = setup();
        let resources = AppResources::new(temp.path(), Size::default());
        assert!(matches!(resources.path_of("../secret"), Err(ResourceError::InvalidName(_))));
        assert!(matches!(resources.path_of(""), Err(ResourceError::InvalidName(_))));
    }

    #[test]
    fn test_missing_root_is_empty_cache() {
        let resources = AppResources::new("/nonexistent/oxidized-emotion", Size::default());
        assert!(resources.manifest_names().is_empty());
        assert!(resources.asset("anything").is_err());
    }
}
