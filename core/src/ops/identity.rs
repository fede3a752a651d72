use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::core::git;
use crate::utils::cmd::GitRunner;
use crate::utils::error::{BootstrapError, BootstrapResult};
use crate::utils::logger;
use crate::utils::StyleMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    UserName,
    UserEmail,
}

impl ConfigKey {
    /// Git config key.
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::UserName => "user.name",
            ConfigKey::UserEmail => "user.email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ConfigKey::UserName => "User name",
            ConfigKey::UserEmail => "User email",
        }
    }

    fn question(self) -> &'static str {
        match self {
            ConfigKey::UserName => "Enter your Git user name: ",
            ConfigKey::UserEmail => "Enter your Git user email: ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Already configured, left untouched.
    Existing(String),
    /// Entered by the operator and persisted.
    Set(String),
}

impl ConfigValue {
    pub fn value(&self) -> &str {
        match self {
            ConfigValue::Existing(value) | ConfigValue::Set(value) => value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityStatus {
    pub name: ConfigValue,
    pub email: ConfigValue,
}

/// Makes sure `user.name` and `user.email` are set globally, asking on
/// `input` for whichever is missing.
pub fn setup_identity(
    git: &impl GitRunner,
    path: impl AsRef<Path>,
    input: &mut impl BufRead,
) -> BootstrapResult<IdentityStatus> {
    let path = path.as_ref();
    let name = configure_key(git, path, ConfigKey::UserName, input)?;
    let email = configure_key(git, path, ConfigKey::UserEmail, input)?;
    Ok(IdentityStatus { name, email })
}

fn configure_key(
    git: &impl GitRunner,
    path: &Path,
    key: ConfigKey,
    input: &mut impl BufRead,
) -> BootstrapResult<ConfigValue> {
    if let Some(value) = git::get_global_config(git, path, key.name()) {
        logger::info(StyleMessage::config_existing(key, &value));
        return Ok(ConfigValue::Existing(value));
    }

    logger::info(StyleMessage::config_missing(key));
    let value = prompt(input, key.question())?;
    if value.is_empty() {
        return Err(BootstrapError::EmptyInput {
            what: key.label().to_string(),
        });
    }

    git::set_global_config(git, path, key.name(), &value)?;
    logger::info(StyleMessage::config_set(key, &value));
    Ok(ConfigValue::Set(value))
}

// end of input reads as an empty answer
fn prompt(input: &mut impl BufRead, question: &str) -> BootstrapResult<String> {
    let mut stdout = io::stdout();
    let _ = write!(stdout, "{}", question);
    let _ = stdout.flush();

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .map_err(|source| BootstrapError::ReadInputFailed { source })?;
    Ok(answer.trim().to_string())
}
