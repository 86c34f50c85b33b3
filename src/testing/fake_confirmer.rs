use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::Confirmer;

pub struct FakeConfirmer {
    answer: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl FakeConfirmer {
    pub fn accepting() -> Self {
        Self { answer: true, prompts: Mutex::new(Vec::new()) }
    }

    pub fn declining() -> Self {
        Self { answer: false, prompts: Mutex::new(Vec::new()) }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Confirmer for FakeConfirmer {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        self.prompts.lock().unwrap().push(message.to_string());
        Ok(self.answer)
    }
}
