use indicatif::{ProgressBar, ProgressStyle};

/// Builder for the progress bars shown on the standard error stream.
///
/// A hidden bar is built in quiet mode, so callers never need to
/// special-case the `--quiet` flag at the call site.
#[derive(Debug)]
pub(crate) struct ProgressBarBuilder {
    template: &'static str,
    len: Option<u64>,
    quiet: bool,
}

impl ProgressBarBuilder {
    pub(crate) fn new(template: &'static str, quiet: bool) -> Self {
        Self {
            template,
            len: None,
            quiet,
        }
    }

    pub(crate) fn len(mut self, len: u64) -> Self {
        self.len = Some(len);
        self
    }

    pub(crate) fn build(self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pbar = match self.len {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };

        pbar.with_style(
            ProgressStyle::with_template(self.template)
                .expect("valid progress template"),
        )
    }
}
