//! Package settings.
//!
//! Settings are resolved once into an immutable [`Settings`] value and
//! passed explicitly to whatever consumes them; there is no process-wide
//! mutable namespace. [`Settings`] implements [`Configurable`], so a
//! resolved value can be dumped as JSON and rebuilt from it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rand::RngCore;
use uuid::Uuid;

use crate::errors::Error;
use crate::interface::generic::Configurable;
use crate::value::{ConfigMap, Value};

/// Package name, also the per-user directory name under the home directory.
pub const PACKAGE_NAME: &str = "groundwork";

/// Environment variable overriding the database URL.
pub const DATABASE_ENV: &str = "DATABASE";
/// Environment variable overriding the secret key.
pub const SECRET_KEY_ENV: &str = "SECRETKEY";

const DEFAULT_DATABASE: &str = "sqlite://";
const SECRET_KEY_BYTES: usize = 64;

/// Immutable package settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Package name.
    pub name: String,
    /// User home directory.
    pub home: PathBuf,
    /// Per-user package directory, `<home>/.groundwork`.
    pub user: PathBuf,
    /// Database URL, from `DATABASE` or `"sqlite://"`.
    pub database: String,
    /// Hex-encoded secret key, from `SECRETKEY` or freshly generated.
    pub secret_key: String,
    /// Identifier of this settings resolution.
    pub instance_id: Uuid,
}

impl Settings {
    /// Resolve settings from the environment, creating the per-user
    /// directory when absent.
    pub fn load() -> Result<Self> {
        let home = dirs::home_dir().context("could not determine home directory")?;
        let user = home.join(format!(".{PACKAGE_NAME}"));
        if !user.exists() {
            fs::create_dir_all(&user)
                .with_context(|| format!("failed to create {}", user.display()))?;
        }
        tracing::debug!(user = %user.display(), "settings resolved");

        Ok(Self {
            name: PACKAGE_NAME.to_string(),
            home,
            user,
            database: env::var(DATABASE_ENV).unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
            secret_key: env::var(SECRET_KEY_ENV).unwrap_or_else(|_| random_secret_key()),
            instance_id: Uuid::new_v4(),
        })
    }

    /// Load settings from a JSON file previously produced by
    /// [`Configurable::to_json`].
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings from {}", path.display()))?;

        let dict = match Value::from(json) {
            Value::Map(map) => map,
            other => bail!(
                "settings file {} must contain a JSON object, found {}",
                path.display(),
                other.kind()
            ),
        };

        Ok(Self::from_dict(dict)?)
    }
}

impl Configurable for Settings {
    fn to_dict(&self) -> ConfigMap {
        ConfigMap::from([
            ("name".to_string(), Value::from(self.name.clone())),
            (
                "home".to_string(),
                Value::from(self.home.display().to_string()),
            ),
            (
                "user".to_string(),
                Value::from(self.user.display().to_string()),
            ),
            ("database".to_string(), Value::from(self.database.clone())),
            (
                "secret_key".to_string(),
                Value::from(self.secret_key.clone()),
            ),
            (
                "instance_id".to_string(),
                Value::from(self.instance_id.to_string()),
            ),
        ])
    }

    fn from_dict(mut dict: ConfigMap) -> Result<Self, Error> {
        let name = take_string(&mut dict, "name")?;
        let home = PathBuf::from(take_string(&mut dict, "home")?);
        let user = PathBuf::from(take_string(&mut dict, "user")?);
        let database = take_string(&mut dict, "database")?;
        let secret_key = take_string(&mut dict, "secret_key")?;
        let instance_id = take_string(&mut dict, "instance_id")?;
        let instance_id = Uuid::parse_str(&instance_id)
            .map_err(|err| Error::invalid_parameter("instance_id", err.to_string()))?;

        if let Some(key) = dict.keys().next() {
            return Err(Error::unexpected_parameter(key));
        }

        Ok(Self {
            name,
            home,
            user,
            database,
            secret_key,
            instance_id,
        })
    }
}

fn take_string(dict: &mut ConfigMap, key: &str) -> Result<String, Error> {
    match dict.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(Error::invalid_parameter(
            key,
            format!("expected string, found {}", other.kind()),
        )),
        None => Err(Error::missing_parameter(key)),
    }
}

fn random_secret_key() -> String {
    let mut bytes = [0u8; SECRET_KEY_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Settings {
        Settings {
            name: PACKAGE_NAME.to_string(),
            home: PathBuf::from("/home/someone"),
            user: PathBuf::from("/home/someone/.groundwork"),
            database: DEFAULT_DATABASE.to_string(),
            secret_key: "deadbeef".to_string(),
            instance_id: Uuid::nil(),
        }
    }

    #[test]
    fn test_round_trip_through_dict() {
        let settings = sample();
        let rebuilt = Settings::from_dict(settings.to_dict()).unwrap();
        assert_eq!(rebuilt, settings);
        assert_eq!(rebuilt.to_dict(), settings.to_dict());
    }

    #[test]
    fn test_from_dict_rejects_wrong_kind() {
        let mut dict = sample().to_dict();
        dict.insert("database".to_string(), Value::Int(42));

        let err = Settings::from_dict(dict).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidParameter {
                key: "database".to_string(),
                reason: "expected string, found int".to_string()
            }
        );
    }

    #[test]
    fn test_from_dict_rejects_bad_uuid() {
        let mut dict = sample().to_dict();
        dict.insert("instance_id".to_string(), Value::from("not-a-uuid"));

        let err = Settings::from_dict(dict).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { key, .. } if key == "instance_id"));
    }

    #[test]
    fn test_random_secret_key_is_hex() {
        let key = random_secret_key();
        assert_eq!(key.len(), SECRET_KEY_BYTES * 2);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
