//! Réglages : valeurs par défaut, puis variables d’environnement `CALC_*`.
//!
//! Les options de ligne de commande (main.rs) passent par-dessus.

use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::app::etat::{HISTORIQUE_DEFAUT, HISTORIQUE_MAX};

/// Préfixe des variables d’environnement (ex: `CALC_LOG=debug`).
pub const PREFIXE_ENV: &str = "CALC_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reglages {
    /// Directive `EnvFilter` (ex: "info", "calculatrice_valide=trace").
    pub log: String,
    pub historique_max: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            log: "info".to_string(),
            historique_max: HISTORIQUE_DEFAUT,
        }
    }
}

impl Reglages {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Reglages::default())).merge(Env::prefixed(PREFIXE_ENV))
    }

    pub fn charger() -> Result<Self, figment::Error> {
        Self::figment().extract::<Self>().map(Self::bornes)
    }

    fn bornes(mut self) -> Self {
        self.historique_max = self.historique_max.clamp(1, HISTORIQUE_MAX);
        self
    }
}
