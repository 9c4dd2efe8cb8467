// sqlexec-core/src/infrastructure/config/profiles.rs

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::profile::ConnectionProfile;
use crate::error::SqlexecError;
use crate::infrastructure::error::InfrastructureError;

pub const ENV_TARGET: &str = "SQLEXEC_TARGET";
pub const ENV_PASSWORD: &str = "SQLEXEC_PASSWORD";

const CANDIDATES: [&str; 2] = ["sqlexec.yaml", "sqlexec.yml"];

#[derive(Debug, Deserialize, Clone)]
pub struct ProfilesFile {
    /// Output used when no target is requested.
    pub target: String,
    pub outputs: BTreeMap<String, OutputConfig>,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct OutputConfig {
    #[serde(default = "default_executable")]
    #[validate(length(min = 1, message = "executable must not be empty"))]
    pub executable: String,

    #[validate(length(min = 1, message = "server must not be empty"))]
    pub server: String,

    #[validate(length(min = 1, message = "user must not be empty"))]
    pub user: Option<String>,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,

    #[validate(length(min = 1, message = "database must not be empty"))]
    pub database: Option<String>,
}

fn default_executable() -> String {
    "sqlcmd".to_string()
}

impl OutputConfig {
    pub fn uses_integrated_auth(&self) -> bool {
        self.user.is_none() && self.password.is_none()
    }
}

/// Looks for `sqlexec.yaml` then `sqlexec.yml` in `dir`.
pub fn find_profiles_file(dir: &Path) -> Result<PathBuf, InfrastructureError> {
    CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "No profiles file in {:?}. Checked: {:?}",
                dir, CANDIDATES
            ))
        })
}

#[instrument]
pub fn load_profiles(path: &Path) -> Result<ProfilesFile, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }
    info!(path = ?path, "Loading connection profiles");

    let content = fs::read_to_string(path)?;
    let profiles: ProfilesFile = serde_yaml::from_str(&content)?;
    Ok(profiles)
}

impl ProfilesFile {
    pub fn from_yaml(content: &str) -> Result<Self, InfrastructureError> {
        serde_yaml::from_str(content).map_err(Into::into)
    }

    /// Builds the profile for `target` (or the file's default target), with
    /// environment overrides applied.
    pub fn resolve(&self, target: Option<&str>) -> Result<ConnectionProfile, SqlexecError> {
        self.resolve_with(target, |key| std::env::var(key).ok())
    }

    /// Same as [`resolve`](Self::resolve) with an explicit variable lookup.
    pub fn resolve_with<F>(
        &self,
        target: Option<&str>,
        lookup: F,
    ) -> Result<ConnectionProfile, SqlexecError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Layering: explicit argument > ENV > file default
        let env_target = lookup(ENV_TARGET);
        let name = target
            .or(env_target.as_deref())
            .unwrap_or(self.target.as_str());

        let mut output = self
            .outputs
            .get(name)
            .cloned()
            .ok_or_else(|| InfrastructureError::TargetNotFound(name.to_string()))?;

        // Only a login has a password to replace; integrated outputs stay -E.
        if output.user.is_some() {
            if let Some(password) = lookup(ENV_PASSWORD) {
                info!(target = name, "Overriding password via ENV");
                output.password = Some(password);
            }
        }

        output
            .validate()
            .map_err(|source| InfrastructureError::Validation {
                target: name.to_string(),
                source,
            })?;

        let profile = ConnectionProfile::new(
            output.executable,
            output.server,
            output.user,
            output.password,
        )?;

        match output.database {
            Some(db) => Ok(profile.with_default_database(db)?),
            None => Ok(profile),
        }
    }
}
