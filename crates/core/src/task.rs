use tokio::task::JoinHandle;

/// Cancellation handle for a background task (debounce timer, frame loop).
///
/// Cancelling aborts the task at its next await point. Dropping the handle
/// cancels too, so whoever owns the handle owns the task's lifetime.
#[derive(Debug)]
#[must_use = "dropping a TaskHandle cancels its task"]
pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    /// Spawn `future` on the current tokio runtime.
    ///
    /// Panics if called outside a runtime, like `tokio::spawn`.
    pub fn spawn<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// True once the task ran to completion or was cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
