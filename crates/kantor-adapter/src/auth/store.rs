/*
[INPUT]:  Session token and token storage directory
[OUTPUT]: Persisted, loaded or cleared session token
[POS]:    Auth layer - single-slot credential persistence
[UPDATE]: When token storage location or file format changes
*/

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tokio::fs;

use crate::http::{KantorError, Result};

/// Fixed key the session token is stored under
pub const TOKEN_KEY: &str = "kantor_token_v3";

/// Single-slot storage for the session token.
///
/// Implementations hold at most one token; `save` overwrites it and `clear`
/// is a no-op when nothing is stored.
#[async_trait]
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    async fn save(&self, token: &str) -> Result<()>;

    /// Returns `Ok(None)` if no token was saved or it was cleared.
    async fn load(&self) -> Result<Option<String>>;

    async fn clear(&self) -> Result<()>;
}

/// File-backed token store with owner-only permissions
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    dir: PathBuf,
}

impl FileCredentialStore {
    /// Create a store that keeps the token in `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Store rooted at `./.kantor-config` relative to the working directory.
    pub fn in_current_dir() -> Self {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(base_dir.join(".kantor-config"))
    }

    /// Path of the token file
    pub fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_KEY)
    }

    async fn write_token(&self, token: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir).await?;

        let path = self.token_path();
        fs::write(&path, token).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&path).await?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms).await?;
        }

        Ok(())
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn save(&self, token: &str) -> Result<()> {
        tracing::debug!(token = %token_preview(token), "saving session token");
        self.write_token(token).await.map_err(|e| {
            KantorError::Storage(format!(
                "Failed to write {}: {e}",
                self.token_path().display()
            ))
        })
    }

    async fn load(&self) -> Result<Option<String>> {
        let path = self.token_path();
        match fs::read_to_string(&path).await {
            Ok(token) => {
                tracing::debug!(token = %token_preview(&token), "loaded session token");
                Ok(Some(token))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KantorError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn clear(&self) -> Result<()> {
        tracing::debug!("clearing session token");
        match fs::remove_file(self.token_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KantorError::Storage(format!(
                "Failed to remove {}: {e}",
                self.token_path().display()
            ))),
        }
    }
}

/// Process-local token store
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn save(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| KantorError::Storage("token lock poisoned".to_string()))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    async fn load(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .read()
            .map_err(|_| KantorError::Storage("token lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .write()
            .map_err(|_| KantorError::Storage("token lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// First 20 characters of a token, for logs
pub(crate) fn token_preview(token: &str) -> String {
    let prefix: String = token.chars().take(20).collect();
    if prefix.len() < token.len() {
        format!("{prefix}...")
    } else {
        prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        let mut path = env::temp_dir();
        path.push(format!("kantor-test-{}", Uuid::new_v4()));
        path
    }

    #[tokio::test]
    async fn test_file_store_lifecycle() {
        let dir = temp_dir();
        let store = FileCredentialStore::new(&dir);

        assert_eq!(store.load().await.unwrap(), None);

        store.save("t1").await.unwrap();
        store.save("t2").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("t2".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);

        // clearing twice is fine
        store.clear().await.unwrap();

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_file_store_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = temp_dir();
        let store = FileCredentialStore::new(&dir);
        store.save("secret").await.unwrap();

        let metadata = std::fs::metadata(store.token_path()).unwrap();
        assert_eq!(metadata.permissions().mode() & 0o777, 0o600);
        assert!(store.token_path().ends_with(TOKEN_KEY));

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_file_store_accepts_any_string() {
        let dir = temp_dir();
        let store = FileCredentialStore::new(&dir);

        for token in ["", " spaced token ", "zażółć\ngęślą", "a.b.c"] {
            store.save(token).await.unwrap();
            assert_eq!(store.load().await.unwrap(), Some(token.to_string()));
        }

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_memory_store_last_write_wins() {
        let store = MemoryCredentialStore::new();
        store.save("t1").await.unwrap();
        store.save("t2").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("t2".to_string()));

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[test]
    fn test_token_preview() {
        assert_eq!(token_preview("short"), "short");
        assert_eq!(
            token_preview("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "eyJhbGciOiJIUzI1NiIs..."
        );
    }
}
