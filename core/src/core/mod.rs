pub mod git;
pub mod gitignore;
