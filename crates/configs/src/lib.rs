use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8001, worker_threads: Some(4) }
    }
}

/// Which document store backs the data layer.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local collections, lost on restart.
    Memory,
    /// Process-local collections persisted to a JSON file.
    #[default]
    File,
    /// MongoDB (requires the `mongo` cargo feature).
    Mongo,
}

impl std::str::FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "mongo" | "mongodb" => Ok(Self::Mongo),
            other => Err(anyhow!("unknown storage backend `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub database: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
            url: String::new(),
            database: String::new(),
        }
    }
}

fn default_storage_path() -> String { "data/studio.json".into() }

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self { Self { enabled: true } }
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

pub fn from_toml_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` (or `CONFIG_PATH`), falling back to environment
    /// variables when no file is present, then validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = match load_default() {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => Self::from_env()?,
            Err(e) => return Err(e),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Defaults overlaid with `SERVER_HOST`, `SERVER_PORT`, `STORAGE_BACKEND`
    /// and `STORAGE_PATH`.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            cfg.server.port = port
                .parse()
                .map_err(|_| anyhow!("SERVER_PORT must be a port number, got `{port}`"))?;
        }
        if let Ok(backend) = std::env::var("STORAGE_BACKEND") {
            cfg.storage.backend = backend.parse()?;
        }
        if let Ok(path) = std::env::var("STORAGE_PATH") {
            cfg.storage.path = path;
        }
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl StorageConfig {
    /// Fill the Mongo connection settings from `MONGO_URL` / `DB_NAME` when
    /// the TOML leaves them empty.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("MONGO_URL") {
                self.url = url;
            }
        }
        if self.database.trim().is_empty() {
            if let Ok(name) = std::env::var("DB_NAME") {
                self.database = name;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.backend {
            StorageBackend::Memory => Ok(()),
            StorageBackend::File => {
                if self.path.trim().is_empty() {
                    return Err(anyhow!("storage.path is required for the file backend"));
                }
                Ok(())
            }
            StorageBackend::Mongo => {
                if self.url.trim().is_empty() {
                    return Err(anyhow!(
                        "storage.url is empty; set it in config.toml or provide MONGO_URL"
                    ));
                }
                let lower = self.url.to_lowercase();
                if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
                    return Err(anyhow!("storage.url must start with mongodb:// or mongodb+srv://"));
                }
                if self.database.trim().is_empty() {
                    return Err(anyhow!(
                        "storage.database is empty; set it in config.toml or provide DB_NAME"
                    ));
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = from_toml_str("").unwrap();
        assert_eq!(cfg.server.port, 8001);
        assert_eq!(cfg.storage.backend, StorageBackend::File);
        assert_eq!(cfg.storage.path, "data/studio.json");
        assert!(cfg.seed.enabled);
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }

    #[test]
    fn parses_full_document() {
        let cfg = from_toml_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [storage]
            backend = "mongo"
            url = "mongodb://localhost:27017"
            database = "studio"

            [seed]
            enabled = false

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.storage.backend, StorageBackend::Mongo);
        assert!(!cfg.seed.enabled);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert!(cfg.storage.validate().is_ok());
    }

    #[test]
    fn zero_port_is_rejected_and_workers_normalized() {
        let mut server = ServerConfig { host: " ".into(), port: 0, worker_threads: None };
        assert!(server.normalize().is_err());

        server.port = 8080;
        server.normalize().unwrap();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.worker_threads, Some(4));
    }

    #[test]
    fn mongo_backend_requires_url_and_database() {
        let mut storage = StorageConfig { backend: StorageBackend::Mongo, ..Default::default() };
        assert!(storage.validate().is_err());

        storage.url = "postgres://nope".into();
        storage.database = "studio".into();
        assert!(storage.validate().is_err());

        storage.url = "mongodb://localhost:27017".into();
        assert!(storage.validate().is_ok());
    }

    #[test]
    fn file_backend_requires_path() {
        let storage = StorageConfig { path: "".into(), ..Default::default() };
        assert!(storage.validate().is_err());
        assert!(StorageConfig { backend: StorageBackend::Memory, path: "".into(), ..Default::default() }
            .validate()
            .is_ok());
    }

    #[test]
    fn backend_names_parse() {
        assert_eq!("Memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!("mongodb".parse::<StorageBackend>().unwrap(), StorageBackend::Mongo);
        assert!("sqlite".parse::<StorageBackend>().is_err());
    }
}
