//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid engine configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// UI-facing labels attached to transition options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionLabels {
    pub send_proposal: String,
    pub cancel: String,
    pub accept_proposal: String,
    pub confirm_rental: String,
    pub mark_pickup: String,
    pub mark_return: String,
}

impl Default for TransitionLabels {
    fn default() -> Self {
        Self {
            send_proposal: "Siguiente: Enviar para aceptacion".to_string(),
            cancel: "Cancelar".to_string(),
            accept_proposal: "Aceptar propuesta".to_string(),
            confirm_rental: "Siguiente: Confirmar alquiler".to_string(),
            mark_pickup: "Siguiente: Marcar recogida".to_string(),
            mark_return: "Siguiente: Marcar devolucion".to_string(),
        }
    }
}

/// All engine parameters. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub labels: TransitionLabels,
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON document.
    ///
    /// ```rust
    /// use rentflow::config::EngineConfig;
    ///
    /// let cfg = EngineConfig::from_json(r#"{"labels": {"cancel": "Cancel"}}"#).unwrap();
    /// assert_eq!(cfg.labels.cancel, "Cancel");
    /// assert_eq!(cfg.labels.accept_proposal, "Aceptar propuesta");
    /// ```
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
