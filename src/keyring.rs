use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Directory-backed store of cryptographic key material, one `.key` file per
/// key. Stands in for the key-management subsystem; the bootstrap reset only
/// needs to be able to purge it.
pub struct Keyring {
    root: PathBuf,
}

impl Keyring {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn import_key(&self, key_id: &str, material: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create keyring directory {}", self.root.display()))?;
        let path = self.root.join(format!("{}.key", key_id));
        fs::write(&path, material)
            .with_context(|| format!("Failed to write key {}", path.display()))?;
        Ok(())
    }

    pub fn key_count(&self) -> Result<usize> {
        if !self.root.exists() {
            return Ok(0);
        }
        let count = fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read keyring directory {}", self.root.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "key"))
            .count();
        Ok(count)
    }

    /// Remove every key, public and private alike.
    pub fn delete_all_keys(&self) -> Result<()> {
        if !self.root.exists() {
            return Ok(());
        }
        let mut removed = 0usize;
        for entry in fs::read_dir(&self.root)
            .with_context(|| format!("Failed to read keyring directory {}", self.root.display()))?
        {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "key") {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to delete key {}", path.display()))?;
                removed += 1;
            }
        }
        info!("Deleted {} keys from keyring", removed);
        Ok(())
    }
}
