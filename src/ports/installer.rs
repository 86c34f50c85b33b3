use crate::domain::{AppError, InstallPlan};

pub trait Installer {
    /// Provision the managed virtual environment described by `plan`.
    fn install(&self, plan: &InstallPlan) -> Result<(), AppError>;
}
