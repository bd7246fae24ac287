use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::Paste;
use crate::names::is_valid_name;

#[derive(Debug, Clone)]
pub struct PasteStore {
    dir: PathBuf,
}

impl PasteStore {
    pub fn new(config: StoreConfig) -> Self {
        PasteStore { dir: config.dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a new paste under its name.
    ///
    /// The file is opened with create-new semantics, so an existing paste is
    /// never touched and two writers racing for one name can't both succeed.
    pub async fn create(&self, paste: &Paste) -> StoreResult<()> {
        self.check_dir().await?;

        if !is_valid_name(&paste.name) {
            return Err(StoreError::InvalidName {
                name: paste.name.clone(),
            });
        }

        let data =
            serde_json::to_vec_pretty(paste).map_err(|source| StoreError::Serialize { source })?;

        let path = self.dir.join(&paste.name);
        let file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => StoreError::AlreadyExists {
                    name: paste.name.clone(),
                },
                _ => StoreError::Write { source },
            })?;

        write_or_remove(file, &path, &data).await
    }

    /// Fetch a paste by name.
    pub async fn fetch(&self, name: &str) -> StoreResult<Paste> {
        self.check_dir().await?;
        self.read_record(name).await
    }

    /// All public pastes, most recent first.
    ///
    /// Entries that can't be read or decoded are logged and skipped instead of
    /// failing the whole listing.
    pub async fn list_public(&self) -> StoreResult<Vec<Paste>> {
        self.check_dir().await?;

        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|source| StoreError::Read { source })?;

        let mut pastes = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| StoreError::Read { source })?
        {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str().filter(|name| is_valid_name(name)) else {
                debug!("ignoring stray entry {file_name:?} in paste directory");
                continue;
            };

            match self.read_record(name).await {
                Ok(paste) if !paste.is_private => pastes.push(paste),
                Ok(_) => {}
                Err(e) => warn!("skipping paste '{name}': {e:?}"),
            }
        }

        pastes.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(pastes)
    }

    async fn check_dir(&self) -> StoreResult<()> {
        match fs::metadata(&self.dir).await {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            _ => Err(StoreError::DirectoryMissing {
                dir: self.dir.clone(),
            }),
        }
    }

    async fn read_record(&self, name: &str) -> StoreResult<Paste> {
        let not_found = || StoreError::NotFound {
            name: name.to_owned(),
        };

        // anything else could point outside the directory
        if !is_valid_name(name) {
            return Err(not_found());
        }

        let data = match fs::read(self.dir.join(name)).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(source) => return Err(StoreError::Read { source }),
        };

        let record: Paste =
            serde_json::from_slice(&data).map_err(|source| StoreError::Deserialize { source })?;

        Ok(record.restore(name))
    }
}

/// Write `data` through `writer`, removing the file at `path` if the write fails.
async fn write_or_remove<W>(mut writer: W, path: &Path, data: &[u8]) -> StoreResult<()>
where
    W: AsyncWrite + Unpin,
{
    let result = async {
        writer.write_all(data).await?;
        writer.flush().await
    }
    .await;

    if let Err(source) = result {
        drop(writer);
        if let Err(e) = fs::remove_file(path).await {
            warn!("failed to remove partial paste '{}': {e}", path.display());
        }
        return Err(StoreError::Write { source });
    }

    Ok(())
}
