use std::path::Path;

use crate::core::gitignore;
use crate::utils::error::BootstrapResult;
use crate::utils::logger;
use crate::utils::StyleMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreFileStatus {
    Existing,
    Created,
}

pub fn create_ignore_file(path: impl AsRef<Path>) -> BootstrapResult<IgnoreFileStatus> {
    match gitignore::write_default(path)? {
        true => {
            logger::info(StyleMessage::ignore_file_created());
            Ok(IgnoreFileStatus::Created)
        }
        false => {
            logger::info(StyleMessage::ignore_file_exists());
            Ok(IgnoreFileStatus::Existing)
        }
    }
}
