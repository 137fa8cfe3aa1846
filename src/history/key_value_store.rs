use async_trait::async_trait;
use std::fmt::Debug;
use std::io;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Durable string storage addressed by key.
#[async_trait]
pub trait KeyValueStore: Debug + Send + Sync {
    async fn get(&self, key: &str) -> io::Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// Stores every key as `<directory>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        FileStore { directory: directory.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(key)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.directory).await?;

        // Replaced through a sibling file so readers never see a partial write
        let path = self.path(key);
        let temporary = path.with_extension("json.tmp");
        fs::write(&temporary, value).await?;
        fs::rename(&temporary, &path).await?;
        debug!(path = %path.display(), "💾 Stored {} bytes", value.len());

        Ok(())
    }
}
