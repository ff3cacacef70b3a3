//! Command implementations

pub mod export;
pub mod import;
pub mod info;
pub mod search;
pub mod view;

/// Guidance printed when no data source yielded any messages
pub(crate) fn print_empty_state() {
    eprintln!("No messages loaded.");
    eprintln!("Import a WhatsApp chat export with: chatview import <file>");
}
