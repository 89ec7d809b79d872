use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_PERSONA: Persona = Persona::Nova;

/// Keys the config command knows how to describe
pub static KNOWN_KEYS: &[(&str, &str)] = &[
    ("persona", "Which assistant answers: nova or jarvis"),
    ("wake_word", "Word that wakes the jarvis persona"),
    ("seed", "Fixed random seed for repeatable responses"),
    ("data_dir", "Directory holding nova.db"),
];

/// Which command processor answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Nova,
    Jarvis,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Nova => "nova",
            Persona::Jarvis => "jarvis",
        }
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nova" => Ok(Persona::Nova),
            "jarvis" => Ok(Persona::Jarvis),
            other => Err(format!("Unknown persona: {} (expected nova or jarvis)", other)),
        }
    }
}

// -----------------------------------------------------------------------------
// Locations
// -----------------------------------------------------------------------------

/// Config directory, `NOVA_HOME` wins over `~/.config/nova`
pub fn config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("NOVA_HOME") {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nova")
}

fn default_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("NOVA_HOME") {
        return PathBuf::from(path);
    }

    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nova")
}

// -----------------------------------------------------------------------------
// Config file
// -----------------------------------------------------------------------------

/// Configuration manager backed by a YAML file
pub struct NovaConfig {
    config_file: PathBuf,
    config: BTreeMap<String, String>,
}

impl NovaConfig {
    /// Load the config from the default location
    pub fn load() -> Self {
        Self::load_from(config_dir().join("config.yaml"))
    }

    /// Load from a specific file. A missing or unreadable file is an empty config.
    pub fn load_from(config_file: PathBuf) -> Self {
        let config: BTreeMap<String, String> = fs::read_to_string(&config_file)
            .ok()
            .and_then(|content| serde_yaml::from_str::<BTreeMap<String, serde_yaml::Value>>(&content).ok())
            .map(|raw| {
                raw.into_iter()
                    .filter_map(|(k, v)| value_to_string(v).map(|v| (k, v)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            config_file,
            config,
        }
    }

    fn save(&self) -> std::io::Result<()> {
        if let Some(dir) = self.config_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_yaml::to_string(&self.config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.config_file, content)
    }

    pub fn path(&self) -> &Path {
        &self.config_file
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).cloned()
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.config.insert(key.to_string(), value.to_string());
        self.save()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.config.iter()
    }

    pub fn persona(&self) -> Persona {
        self.get("persona")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PERSONA)
    }

    pub fn wake_word(&self) -> String {
        self.get("wake_word")
            .unwrap_or_else(|| crate::jarvis::DEFAULT_WAKE_WORD.to_string())
    }

    pub fn seed(&self) -> Option<u64> {
        self.get("seed").and_then(|s| s.trim().parse().ok())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.get("data_dir")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir().join("nova.db")
    }
}

fn value_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = NovaConfig::load_from(dir.path().join("config.yaml"));

        assert_eq!(config.persona(), Persona::Nova);
        assert_eq!(config.wake_word(), "jarvis");
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_set_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = NovaConfig::load_from(path.clone());
        config.set("persona", "jarvis").unwrap();
        config.set("seed", "42").unwrap();
        config.set("data_dir", "/tmp/nova-data").unwrap();

        let reloaded = NovaConfig::load_from(path);
        assert_eq!(reloaded.persona(), Persona::Jarvis);
        assert_eq!(reloaded.seed(), Some(42));
        assert_eq!(reloaded.db_path(), PathBuf::from("/tmp/nova-data/nova.db"));
    }

    #[test]
    fn test_numeric_yaml_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "seed: 7\nwake_word: friday\n").unwrap();

        let config = NovaConfig::load_from(path);
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.wake_word(), "friday");
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, ": : not yaml [").unwrap();

        let config = NovaConfig::load_from(path);
        assert_eq!(config.entries().count(), 0);
    }

    #[test]
    fn test_parse_persona() {
        assert_eq!("Jarvis".parse::<Persona>().unwrap(), Persona::Jarvis);
        assert!("hal".parse::<Persona>().is_err());
    }
}
