use indicatif::{ProgressBar as LibraryProgressBar, ProgressState, ProgressStyle};
use std::fmt::Write;

/// Single terminal progress line, redrawn in place as chunks arrive.
/// Renders a percentage bar when the total size is known, a byte counter
/// otherwise.
pub struct ProgressBar {
    inner: LibraryProgressBar,
    name: String,
}

impl ProgressBar {
    pub fn new(name: String, total: Option<u64>) -> Self {
        let inner = match total {
            Some(length) => {
                let style = ProgressStyle::with_template(
                    "{msg} {spinner:.green} {bar:40.cyan/blue} {percent}% {bytes}/{total_bytes} ({eta} / {elapsed_precise})",
                )
                .unwrap()
                .with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
                    write!(w, "{:.1}s", state.eta().as_secs_f64()).unwrap()
                })
                .progress_chars("#>-");
                let bar = LibraryProgressBar::new(length);
                bar.set_style(style);
                bar
            }
            None => {
                let style = ProgressStyle::with_template(
                    "{msg} {spinner:.green} {bytes} ({elapsed_precise})",
                )
                .unwrap();
                let bar = LibraryProgressBar::new_spinner();
                bar.set_style(style);
                bar
            }
        };

        let pb = Self {
            inner,
            name: name.clone(),
        };
        pb.inner.set_message(name);
        pb
    }

    pub fn increase(&self, delta: u64) {
        self.inner.inc(delta);
    }

    pub fn finish(&self) {
        self.inner.finish_with_message(format!("{} ✔︎", self.name));
    }
}
