use log::{error, info};

use crate::utils::style_message::StyleMessage;

pub fn info(message: impl Into<StyleMessage>) {
    info!("{}", message.into());
}

pub fn error(message: impl Into<StyleMessage>) {
    error!("{}", message.into());
}

pub fn blank() {
    info!("");
}

pub fn lines(messages: Vec<StyleMessage>) {
    messages.into_iter().for_each(info);
}

/// Prints a section header and prints the matching footer when dropped.
pub struct Section;

impl Section {
    pub fn open(title: impl AsRef<str>) -> Self {
        info(StyleMessage::section_header(title));
        Section
    }
}

impl Drop for Section {
    fn drop(&mut self) {
        info(StyleMessage::section_footer());
    }
}

/// Runs `f` between a section header and footer.
pub fn section<T>(title: impl AsRef<str>, f: impl FnOnce() -> T) -> T {
    let _section = Section::open(title);
    f()
}
