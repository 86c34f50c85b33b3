use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::AppError;

/// Admits at most one installation at a time.
#[derive(Debug, Default)]
pub struct InstallGate {
    busy: AtomicBool,
}

impl InstallGate {
    /// Claim the gate, or fail with `InstallInProgress` while another ticket is alive.
    pub fn begin(&self) -> Result<InstallTicket<'_>, AppError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AppError::InstallInProgress)?;
        Ok(InstallTicket { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the gate on drop.
#[derive(Debug)]
pub struct InstallTicket<'a> {
    gate: &'a InstallGate,
}

impl Drop for InstallTicket<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_rejected_while_first_is_outstanding() {
        let gate = InstallGate::default();
        let ticket = gate.begin().unwrap();

        assert!(gate.is_busy());
        assert!(matches!(gate.begin(), Err(AppError::InstallInProgress)));

        drop(ticket);
        assert!(!gate.is_busy());
        assert!(gate.begin().is_ok());
    }
}
