use std::time::Duration;

use log::debug;
use stepchain_core::{ActionStep, StepError};

/// Action que bloquea el hilo actual. No hay cancelación: la cadena espera
/// igual que si se llamara a `std::thread::sleep` directamente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sleep {
    pub duration: Duration,
}

impl Sleep {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl ActionStep<StepError> for Sleep {
    fn run(self) -> Result<(), StepError> {
        debug!("sleep step: {:?}", self.duration);
        if !self.duration.is_zero() {
            std::thread::sleep(self.duration);
        }
        Ok(())
    }
}
