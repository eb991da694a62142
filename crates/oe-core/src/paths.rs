//! Folder layout and default file names
//!
//! The defaults here only seed a fresh configuration. Everything else should
//! go through the user-editable [`PathConfig`] stored in [`Config`](crate::Config).

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FrontendError, Result};

/// Directory name used under the platform config/data/document folders
pub const APP_DIR_NAME: &str = "oxidized-emotion";

/// Number of memory card ports
pub const MEMCARD_PORTS: u32 = 2;
/// Number of slots per port when a multitap is attached
pub const MEMCARD_SLOTS: u32 = 4;

/// User-configurable folders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FolderId {
    Settings,
    Bios,
    Savestates,
    MemoryCards,
    Documents,
    Cheats,
    CheatsWs,
}

impl FolderId {
    pub const ALL: [FolderId; 7] = [
        FolderId::Settings,
        FolderId::Bios,
        FolderId::Savestates,
        FolderId::MemoryCards,
        FolderId::Documents,
        FolderId::Cheats,
        FolderId::CheatsWs,
    ];

    /// Folder name appended to the base directory, `None` for the documents root
    pub fn base_name(self) -> Option<&'static str> {
        match self {
            Self::Settings => Some("inis"),
            Self::Bios => Some("bios"),
            Self::Savestates => Some("sstates"),
            Self::MemoryCards => Some("memcards"),
            Self::Documents => None,
            Self::Cheats => Some("cheats"),
            Self::CheatsWs => Some("cheats_ws"),
        }
    }
}

/// Path configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    pub documents: PathBuf,
    pub settings: PathBuf,
    pub bios: PathBuf,
    pub savestates: PathBuf,
    pub memory_cards: PathBuf,
    pub cheats: PathBuf,
    pub cheats_ws: PathBuf,
    /// Frontend resources (icons, images, manifest)
    pub resources: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        let documents = dirs::document_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);
        let config_base = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);
        let data_base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);

        Self {
            settings: config_base.join("inis"),
            bios: documents.join("bios"),
            savestates: documents.join("sstates"),
            memory_cards: documents.join("memcards"),
            cheats: documents.join("cheats"),
            cheats_ws: documents.join("cheats_ws"),
            resources: data_base.join("resources"),
            documents,
        }
    }
}

impl PathConfig {
    /// Build a layout with every folder directly under `root`
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut config = Self {
            documents: root.clone(),
            resources: root.join("resources"),
            ..Self::default()
        };
        for id in FolderId::ALL {
            if let Some(base) = id.base_name() {
                config.set(id, root.join(base));
            }
        }
        config
    }

    /// Stored path for a folder, possibly relative
    pub fn get(&self, id: FolderId) -> &Path {
        match id {
            FolderId::Settings => &self.settings,
            FolderId::Bios => &self.bios,
            FolderId::Savestates => &self.savestates,
            FolderId::MemoryCards => &self.memory_cards,
            FolderId::Documents => &self.documents,
            FolderId::Cheats => &self.cheats,
            FolderId::CheatsWs => &self.cheats_ws,
        }
    }

    pub fn set(&mut self, id: FolderId, path: impl Into<PathBuf>) {
        let path = path.into();
        match id {
            FolderId::Settings => self.settings = path,
            FolderId::Bios => self.bios = path,
            FolderId::Savestates => self.savestates = path,
            FolderId::MemoryCards => self.memory_cards = path,
            FolderId::Documents => self.documents = path,
            FolderId::Cheats => self.cheats = path,
            FolderId::CheatsWs => self.cheats_ws = path,
        }
    }

    /// Complete path for a folder; relative entries hang off the documents folder
    pub fn resolve(&self, id: FolderId) -> PathBuf {
        let path = self.get(id);
        if path.is_absolute() || id == FolderId::Documents {
            path.to_path_buf()
        } else {
            self.documents.join(path)
        }
    }

    /// Create every configured folder that does not exist yet
    pub fn create_all(&self) -> io::Result<()> {
        for id in FolderId::ALL {
            let path = self.resolve(id);
            if !path.exists() {
                tracing::debug!("Creating {:?} folder at {}", id, path.display());
                std::fs::create_dir_all(&path)?;
            }
        }
        Ok(())
    }
}

/// Default file names
pub struct FileNames;

impl FileNames {
    /// Frontend settings file
    pub fn ui_config() -> &'static str {
        "ui.toml"
    }

    /// Virtual machine settings file
    pub fn vm_config() -> &'static str {
        "vm.toml"
    }

    /// Memory card file name for a port and multitap slot
    pub fn memcard(port: u32, slot: u32) -> Result<String> {
        if port >= MEMCARD_PORTS || slot >= MEMCARD_SLOTS {
            return Err(FrontendError::InvalidMemcardSlot { port, slot });
        }

        Ok(if slot == 0 {
            format!("Mcd{:03}.ps2", port + 1)
        } else {
            format!("Mcd-Multitap{}-Slot{:02}.ps2", port + 1, slot + 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memcard_names() {
        assert_eq!(FileNames::memcard(0, 0).unwrap(), "Mcd001.ps2");
        assert_eq!(FileNames::memcard(1, 0).unwrap(), "Mcd002.ps2");
        assert_eq!(FileNames::memcard(0, 1).unwrap(), "Mcd-Multitap1-Slot02.ps2");
        assert_eq!(FileNames::memcard(1, 3).unwrap(), "Mcd-Multitap2-Slot04.ps2");
        assert!(FileNames::memcard(2, 0).is_err());
        assert!(FileNames::memcard(0, 4).is_err());
    }

    #[test]
    fn test_default_layout() {
        let paths = PathConfig::default();
        assert!(paths.bios.ends_with("oxidized-emotion/bios"));
        assert!(paths.memory_cards.starts_with(&paths.documents));
        assert!(paths.settings.ends_with("inis"));
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut paths = PathConfig::default();
        for id in FolderId::ALL {
            paths.set(id, format!("/tmp/{:?}", id));
        }
        for id in FolderId::ALL {
            assert_eq!(paths.get(id), Path::new(&format!("/tmp/{:?}", id)));
        }
    }

    #[test]
    fn test_resolve_relative() {
        let mut paths = PathConfig::rooted_at("/home/user/emotion");
        paths.set(FolderId::Cheats, "my_cheats");
        assert_eq!(
            paths.resolve(FolderId::Cheats),
            PathBuf::from("/home/user/emotion/my_cheats")
        );
        assert_eq!(
            paths.resolve(FolderId::Bios),
            PathBuf::from("/home/user/emotion/bios")
        );
    }

    #[test]
    fn test_create_all() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = PathConfig::rooted_at(temp.path());
        paths.create_all().unwrap();
        for id in FolderId::ALL {
            assert!(paths.resolve(id).is_dir(), "{:?} missing", id);
        }
    }
}
