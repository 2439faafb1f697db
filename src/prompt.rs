use crate::loader::zone_file::ZONE_EXTENSION;
use log::debug;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

/// Blocking dialogs the editor needs from the platform.
pub trait Prompt {
    /// Yes/no question. True means yes.
    fn confirm(&mut self, title: &str, text: &str) -> bool;
    /// Let the user choose a `.zone` file to open.
    fn pick_zone_file(&mut self, start_dir: &Path) -> Option<PathBuf>;
    /// Tell the user an operation failed.
    fn report_error(&mut self, title: &str, text: &str);
}

/// Native dialogs through `rfd`.
#[derive(Debug, Default)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn confirm(&mut self, title: &str, text: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::YesNo)
            .show();
        let yes = matches!(result, MessageDialogResult::Yes);
        debug!("confirm '{}' -> {}", title, yes);
        yes
    }

    fn pick_zone_file(&mut self, start_dir: &Path) -> Option<PathBuf> {
        let mut dialog = FileDialog::new().add_filter("Zone File", &[ZONE_EXTENSION]);
        if start_dir.is_dir() {
            dialog = dialog.set_directory(start_dir);
        }
        dialog.pick_file()
    }

    fn report_error(&mut self, title: &str, text: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
