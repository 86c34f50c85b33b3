/// User-facing messages from the host (status line, message area, console).
///
/// Shared with the install progress ticker thread, hence `Sync`.
pub trait Notifier: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
