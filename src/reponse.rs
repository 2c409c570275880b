//! Enveloppe requête / réponse (JSON).
//!
//! Contrat :
//! - succès : `{"status":"Valid","result":<f64>,"error":null}`, code 200
//! - échec  : `{"status":"Invalid","result":null,"error":"<message>"}`, code 400

use serde::{Deserialize, Serialize};

use crate::noyau::{self, ExpressionInvalide};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requete {
    /// Absent ou `null` => "Expression cannot be null or empty!".
    #[serde(default)]
    pub expression: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statut {
    Valid,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reponse {
    pub status: Statut,
    pub result: Option<f64>,
    pub error: Option<String>,
}

impl Reponse {
    pub fn depuis(resultat: Result<f64, ExpressionInvalide>) -> Self {
        match resultat {
            Ok(v) => Self {
                status: Statut::Valid,
                result: Some(v),
                error: None,
            },
            Err(e) => Self {
                status: Statut::Invalid,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// 200 si valide, 400 (erreur client) sinon.
    pub fn code_statut(&self) -> u16 {
        match self.status {
            Statut::Valid => 200,
            Statut::Invalid => 400,
        }
    }
}

impl Requete {
    pub fn traiter(&self) -> Reponse {
        Reponse::depuis(noyau::evaluer_opt(self.expression.as_deref()))
    }
}
