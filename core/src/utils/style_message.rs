use ansi_term::{Colour, Style};
use lazy_static::lazy_static;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::ops::ConfigKey;

/// Width of section rules, not counting the corner glyph.
pub const RULE_WIDTH: usize = 75;

lazy_static! {
    pub static ref ERROR: Style = Style::new().fg(Colour::Fixed(196));
    pub static ref WARNING: Style = Style::new().fg(Colour::Fixed(220));
    pub static ref INFO: Style = Style::new().fg(Colour::Fixed(39));
    pub static ref INFO_BOLD: Style = Style::new().fg(Colour::Fixed(39)).bold();
    pub static ref SUCCESS: Style = Style::new().fg(Colour::Fixed(46));
    pub static ref ACTION: Style = Style::new().fg(Colour::Fixed(66));
    pub static ref HEADER_BOLD: Style = Style::new().fg(Colour::Fixed(27)).bold();
    pub static ref TITLE: Style = Style::new().fg(Colour::Fixed(144));
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleText {
    pub content: String,
    pub style: Option<&'static Style>,
}

impl StyleText {
    pub fn to_plain_text(&self) -> &str {
        self.content.as_str()
    }
}

impl Display for StyleText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.style {
            Some(style) if console::colors_enabled() => {
                write!(f, "{}", style.paint(&self.content))
            }
            _ => f.write_str(&self.content),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StyleMessage(pub Vec<StyleText>);

impl StyleMessage {
    pub fn new() -> Self {
        StyleMessage::default()
    }

    pub fn plain_text(mut self, content: impl AsRef<str>) -> Self {
        self.0.push(StyleText {
            content: content.as_ref().to_string(),
            style: None,
        });
        self
    }

    pub fn styled_text(mut self, content: impl AsRef<str>, style: &'static Style) -> Self {
        self.0.push(StyleText {
            content: content.as_ref().to_string(),
            style: Some(style),
        });
        self
    }

    pub fn to_plain_text(&self) -> String {
        self.0.iter().map(|st| st.to_plain_text()).collect()
    }
}

// status lines
impl StyleMessage {
    pub fn error(text: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text("✗", &ERROR)
            .plain_text(" ")
            .plain_text(text)
    }

    pub fn warning(text: impl AsRef<str>) -> Self {
        StyleMessage::new().styled_text(format!("⚠ {}", text.as_ref()), &WARNING)
    }

    pub fn info(text: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text("ｉ", &INFO_BOLD)
            .styled_text(text, &INFO)
    }

    pub fn success(text: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text("✔", &SUCCESS)
            .plain_text(" ")
            .plain_text(text)
    }

    pub fn action(text: impl AsRef<str>) -> Self {
        StyleMessage::new()
            .styled_text("⮻", &ACTION)
            .plain_text(" ")
            .plain_text(text)
    }
}

// headers
impl StyleMessage {
    pub fn section_header(title: impl AsRef<str>) -> Self {
        let title = title.as_ref();
        let dashes = RULE_WIDTH.saturating_sub(title.chars().count() + 5);
        StyleMessage::new().styled_text(
            format!("┏━ {} ━{}", title, "━".repeat(dashes)),
            &HEADER_BOLD,
        )
    }

    pub fn section_footer() -> Self {
        StyleMessage::new().styled_text(format!("┗━{}", "━".repeat(RULE_WIDTH)), &HEADER_BOLD)
    }

    /// Three lines framing `title` centered in a box `width` columns wide.
    pub fn title_box(title: impl AsRef<str>, width: usize) -> Vec<Self> {
        let title = title.as_ref();
        let inner = width.saturating_sub(2);
        let len = title.chars().count();
        let padding = inner.saturating_sub(len) / 2;
        let trailing = inner.saturating_sub(len + padding);
        let rule = "━".repeat(inner);

        vec![
            StyleMessage::new().styled_text(format!("┏{}┓", rule), &TITLE),
            StyleMessage::new().styled_text(
                format!("┃{}{}{}┃", " ".repeat(padding), title, " ".repeat(trailing)),
                &TITLE,
            ),
            StyleMessage::new().styled_text(format!("┗{}┛", rule), &TITLE),
        ]
    }
}

// format message
impl StyleMessage {
    pub fn git_installed() -> Self {
        StyleMessage::success("Git is installed")
    }

    /// Platform specific hints printed when git cannot be found.
    pub fn install_guidance() -> Vec<Self> {
        let mut lines = vec![StyleMessage::new().plain_text("Please install Git:")];
        if cfg!(windows) {
            lines.push(
                StyleMessage::new()
                    .plain_text("  - Windows: Download from https://git-scm.com/download/win"),
            );
            lines.push(
                StyleMessage::new()
                    .plain_text("  - Or use winget: winget install --id Git.Git -e --source winget"),
            );
        } else {
            lines.push(StyleMessage::new().plain_text("  - macOS: brew install git"));
            lines.push(
                StyleMessage::new().plain_text("  - Linux: sudo apt-get install git (Ubuntu/Debian)"),
            );
        }
        lines
    }

    pub fn workspace_path(path: impl AsRef<Path>) -> Self {
        StyleMessage::info(format!("Workspace path: {}", path.as_ref().display()))
    }

    pub fn already_repository() -> Self {
        StyleMessage::success("Workspace is already a Git repository")
    }

    pub fn skip_init() -> Self {
        StyleMessage::info("Skipping initialization")
    }

    pub fn initializing() -> Self {
        StyleMessage::action("Initializing Git repository...")
    }

    pub fn repo_initialized() -> Self {
        StyleMessage::success("Git repository initialized")
    }

    pub fn config_missing(key: ConfigKey) -> Self {
        StyleMessage::info(format!("{} is not configured", key.label()))
    }

    pub fn config_existing(key: ConfigKey, value: impl AsRef<str>) -> Self {
        StyleMessage::success(format!(
            "{} already configured: {}",
            key.label(),
            value.as_ref()
        ))
    }

    pub fn config_set(key: ConfigKey, value: impl AsRef<str>) -> Self {
        StyleMessage::success(format!("Set {} to: {}", key.name(), value.as_ref()))
    }

    pub fn ignore_file_exists() -> Self {
        StyleMessage::success(".gitignore already exists")
    }

    pub fn ignore_file_created() -> Self {
        StyleMessage::success("Created .gitignore")
    }

    pub fn no_changes() -> Self {
        StyleMessage::info("No changes to commit")
    }

    pub fn already_has_commits() -> Self {
        StyleMessage::info("Repository already has commits")
    }

    pub fn changes_left_staged() -> Self {
        StyleMessage::warning("Staged changes were left uncommitted")
    }

    pub fn commit_created() -> Self {
        StyleMessage::success("Initial commit created")
    }

    pub fn setup_complete() -> Self {
        StyleMessage::success("Git workspace setup complete!")
    }

    pub fn next_steps() -> Vec<Self> {
        [
            "Next steps:",
            "  1. Review and customize .gitignore if needed",
            "  2. Add a remote repository:",
            "     git remote add origin <repository-url>",
            "  3. Push to remote:",
            "     git push -u origin main",
        ]
        .iter()
        .map(|line| StyleMessage::new().plain_text(line))
        .collect()
    }

    pub fn interrupted() -> Self {
        StyleMessage::error("Interrupted by user")
    }

    pub fn unexpected_error(error: impl Display) -> Self {
        StyleMessage::error(format!("Unexpected error: {}", error))
    }
}

impl Display for StyleMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for text in &self.0 {
            write!(f, "{}", text)?;
        }
        Ok(())
    }
}

impl<T> From<T> for StyleMessage
where
    T: AsRef<str>,
{
    fn from(value: T) -> Self {
        StyleMessage::new().plain_text(value.as_ref())
    }
}
