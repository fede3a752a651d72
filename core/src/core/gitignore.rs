use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::{BootstrapError, BootstrapResult};

pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Written verbatim when a workspace has no ignore file yet.
pub const DEFAULT_TEMPLATE: &str = r#"# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST
.venv/
venv/
ENV/
env/

# Rust
target/
**/*.rs.bk
Cargo.lock

# Node.js
node_modules/
npm-debug.log*
yarn-debug.log*
yarn-error.log*
.pnpm-debug.log*

# IDEs and editors
.vscode/
.cursor/
.idea/
*.swp
*.swo
*~
.DS_Store
*.sublime-project
*.sublime-workspace

# OS
Thumbs.db
.DS_Store
*.log

# Build artifacts
*.o
*.exe
*.dll
*.dylib
*.class

# Testing
.pytest_cache/
.coverage
htmlcov/
.tox/

# Misc
*.bak
*.tmp
*.temp
"#;

pub fn ignore_file_path(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().join(IGNORE_FILE_NAME)
}

/// Writes the default template unless an ignore file is already present.
/// Returns whether a file was written.
pub fn write_default(path: impl AsRef<Path>) -> BootstrapResult<bool> {
    let file = ignore_file_path(path);
    if file.exists() {
        return Ok(false);
    }

    fs::write(&file, DEFAULT_TEMPLATE)
        .map_err(|source| BootstrapError::WriteIgnoreFileFailed { path: file, source })?;
    Ok(true)
}
