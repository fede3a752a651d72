mod bootstrap;
mod commit;
mod identity;
mod ignore_file;
mod prerequisites;
mod repository;

pub use bootstrap::{BootstrapOptions, BootstrapReport, Bootstrapper};
pub use commit::{make_initial_commit, CommitStatus};
pub use identity::{setup_identity, ConfigKey, ConfigValue, IdentityStatus};
pub use ignore_file::{create_ignore_file, IgnoreFileStatus};
pub use prerequisites::check_prerequisites;
pub use repository::{ensure_repository, RepositoryStatus};
