//! Escenario de demostración.
//!
//! producer(expected_len) -> action(sleep) -> transform(longitud del texto
//! fijo) -> consumer(assert == expected_len) -> transform(reporte).
//! Un texto de longitud distinta hace fallar la aserción y el error se
//! devuelve sin ejecutar el último step.

use log::{debug, info};
use serde::Serialize;
use stepchain_core::{ProducerStep, StepChain, StepError};
use stepchain_steps::{AssertEquals, RandomString, Sleep, StringLength};

use crate::config::DemoConfig;
use crate::errors::AppError;

/// Resultado de una corrida exitosa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub fixed_string: String,
    pub measured_len: usize,
    pub token: String,
}

pub fn run_scenario(cfg: &DemoConfig) -> Result<DemoReport, AppError> {
    debug!("demo config: {cfg:?}");
    let token_len = cfg.random_len;

    let chain = StepChain::new().apply_producer(|| Ok(cfg.expected_len))?
                                .apply_action(Sleep::millis(cfg.sleep_ms))?
                                .apply_transform(|_expected: usize| StringLength::of(cfg.fixed_string.as_str()).produce())?
                                .apply_consumer(AssertEquals::new(cfg.expected_len))?
                                .apply_transform(|measured_len: usize| -> Result<DemoReport, StepError> {
                                    Ok(DemoReport { fixed_string: cfg.fixed_string.clone(),
                                                    measured_len,
                                                    token: RandomString::of_length(token_len).produce()? })
                                })?;

    let report = chain.into_context();
    info!("demo completed: len={} token={}", report.measured_len, report.token);
    Ok(report)
}

/// Reporte como JSON legible (salida del binario).
pub fn render_report(report: &DemoReport) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(report)?)
}
