use tracing::{debug, info};

use crate::error::Result;
use crate::progress::Progress;
use crate::prompt::Prompter;
use crate::report::{NOTHING_SELECTED, Reporter};

/// Anything that can label a progress step.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for String {
    fn display_name(&self) -> &str {
        self
    }
}

impl Named for &str {
    fn display_name(&self) -> &str {
        self
    }
}

/// Collaborators a batch talks to.
pub struct Batch<'a, P, G, R> {
    pub prompter: &'a P,
    pub progress: &'a mut G,
    pub reporter: &'a R,
}

impl<P, G, R> Batch<'_, P, G, R>
where
    P: Prompter,
    G: Progress,
    R: Reporter,
{
    /// Confirms once, then runs `action` over `items` in order.
    ///
    /// Returns `Ok(false)` when nothing ran: empty input or a declined confirmation.
    /// The first failing item aborts the batch and its error is returned unchanged.
    pub fn run<T, O>(
        &mut self,
        items: &[T],
        mut action: impl FnMut(&T) -> Result<O>,
    ) -> Result<bool>
    where
        T: Named,
    {
        if items.is_empty() {
            self.reporter.success(NOTHING_SELECTED);
            return Ok(false);
        }

        if !self.prompter.confirm(false)? {
            info!("confirmation declined");
            return Ok(false);
        }

        let total = items.len() as u64;
        let progress = StopOnDrop::start(&mut *self.progress, total);
        for item in items {
            let name = item.display_name();
            debug!(%name, "processing item");
            action(item)?;
            progress.0.advance(1, name);
        }
        progress.0.set_value(total, "");
        Ok(true)
    }
}

/// Stops the indicator on every way out of the loop, including `?`.
struct StopOnDrop<'a, G: Progress>(&'a mut G);

impl<'a, G: Progress> StopOnDrop<'a, G> {
    fn start(progress: &'a mut G, total: u64) -> Self {
        progress.start(total, "");
        Self(progress)
    }
}

impl<G: Progress> Drop for StopOnDrop<'_, G> {
    fn drop(&mut self) {
        self.0.stop();
    }
}
