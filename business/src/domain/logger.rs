/// Logging port used by use cases and domain services.
///
/// Recoverable problems (unresolved references, missing conversion factors)
/// are reported here instead of being returned as errors.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
