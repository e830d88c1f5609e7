//! Configuración del binario de demostración.
//! Carga variables de entorno (.env opcional, una sola vez) y las convierte
//! en un `DemoConfig`; valores numéricos mal formados son `AppError::Config`.
use std::env;

use once_cell::sync::Lazy;

use crate::errors::AppError;

pub const SLEEP_MS_VAR: &str = "STEPCHAIN_SLEEP_MS";
pub const FIXED_STRING_VAR: &str = "STEPCHAIN_FIXED_STRING";
pub const EXPECTED_LEN_VAR: &str = "STEPCHAIN_EXPECTED_LEN";
pub const RANDOM_LEN_VAR: &str = "STEPCHAIN_RANDOM_LEN";

/// Longitud máxima aceptada para el token aleatorio.
pub const MAX_RANDOM_LEN: usize = 4096;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Parámetros del escenario de demostración.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Duración del step de espera.
    pub sleep_ms: u64,
    /// Texto cuya longitud mide el step transform.
    pub fixed_string: String,
    /// Valor que produce el primer step y que se verifica al final.
    pub expected_len: usize,
    /// Longitud del token aleatorio del reporte.
    pub random_len: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { sleep_ms: 0,
               fixed_string: "0123456789".to_string(),
               expected_len: 10,
               random_len: 8 }
    }
}

impl DemoConfig {
    /// Lee la configuración del entorno del proceso (tras cargar `.env`).
    pub fn from_env() -> Result<Self, AppError> {
        init_dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construye la configuración a partir de una función de búsqueda;
    /// las claves ausentes toman el valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
        where F: Fn(&str) -> Option<String>
    {
        let defaults = Self::default();
        let random_len = parse_or(&lookup, RANDOM_LEN_VAR, defaults.random_len)?;
        if random_len > MAX_RANDOM_LEN {
            return Err(AppError::Config(format!("{RANDOM_LEN_VAR} excede el máximo ({MAX_RANDOM_LEN}): {random_len}")));
        }
        Ok(Self { sleep_ms: parse_or(&lookup, SLEEP_MS_VAR, defaults.sleep_ms)?,
                  fixed_string: lookup(FIXED_STRING_VAR).unwrap_or(defaults.fixed_string),
                  expected_len: parse_or(&lookup, EXPECTED_LEN_VAR, defaults.expected_len)?,
                  random_len })
    }

    /// Aplica los argumentos de línea de comandos (sin el nombre del
    /// programa): el primero, si existe, reemplaza `fixed_string`.
    pub fn with_args<I>(mut self, args: I) -> Self
        where I: IntoIterator<Item = String>
    {
        if let Some(text) = args.into_iter().next() {
            self.fixed_string = text;
        }
        self
    }
}

fn parse_or<F, N>(lookup: &F, key: &str, default: N) -> Result<N, AppError>
    where F: Fn(&str) -> Option<String>,
          N: std::str::FromStr
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim()
                        .parse()
                        .map_err(|_| AppError::Config(format!("{key} inválido: {raw:?}"))),
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
