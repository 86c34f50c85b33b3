use crate::domain::AppError;

pub trait Confirmer {
    /// Ask a yes/cancel question. `Ok(false)` means the user cancelled.
    fn confirm(&self, message: &str) -> Result<bool, AppError>;
}
