use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "Progress  [{bar:50}] {percent}% | ETA: {eta} | {pos}/{len} {msg}";

/// Progress indicator for a batch of deletions.
pub trait Progress {
    fn start(&mut self, total: u64, label: &str);
    fn advance(&mut self, by: u64, label: &str);
    fn set_value(&mut self, value: u64, label: &str);
    fn stop(&mut self);
}

/// Terminal progress bar. Hidden automatically when stderr is not a terminal.
#[derive(Debug, Default)]
pub struct BarProgress {
    bar: Option<ProgressBar>,
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template(TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█░")
}

impl Progress for BarProgress {
    fn start(&mut self, total: u64, label: &str) {
        let bar = ProgressBar::new(total);
        bar.set_style(bar_style());
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self, by: u64, label: &str) {
        if let Some(bar) = &self.bar {
            bar.inc(by);
            bar.set_message(label.to_string());
        }
    }

    fn set_value(&mut self, value: u64, label: &str) {
        if let Some(bar) = &self.bar {
            bar.set_position(value);
            bar.set_message(label.to_string());
        }
    }

    fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}
