//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, enveloppe,
//! démarche, historique) et offrir des opérations simples (C/CLR/AC) sans logique
//! d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné (HISTORIQUE_MAX).

use std::collections::VecDeque;

/// Taille d’historique par défaut.
pub const HISTORIQUE_DEFAUT: usize = 20;

/// Garde-fou : on borne l’historique (anti-abus / anti-gel).
pub const HISTORIQUE_MAX: usize = 200;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub nettoyee: String,
    pub jetons: String,
    pub etapes: String,
}

/// Une évaluation passée : entrée + valeur OU message d’erreur.
#[derive(Clone, Debug, PartialEq)]
pub struct LigneHistorique {
    pub entree: String,
    pub sortie: Result<f64, String>,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,  // dernière valeur (texte)
    pub erreur: String,    // message d’erreur exact du noyau
    pub enveloppe: String, // JSON {status, result, error}

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique ---
    pub historique: VecDeque<LigneHistorique>,
    pub historique_max: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(HISTORIQUE_DEFAUT)
    }
}

impl AppCalc {
    pub fn new(historique_max: usize) -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            enveloppe: String::new(),
            demarche: Demarche::default(),
            historique: VecDeque::new(),
            historique_max: historique_max.clamp(1, HISTORIQUE_MAX),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + enveloppe + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.enveloppe.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE `resultat` (dernière valeur) pour ne pas “effacer l’écran” sur une faute ;
    /// la démarche, elle, n’a plus de sens.
    pub fn set_erreur(&mut self, msg: impl Into<String>, enveloppe: impl Into<String>) {
        let msg = msg.into();
        self.pousser_historique(Err(msg.clone()));

        self.erreur = msg;
        self.enveloppe = enveloppe.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (valeur + enveloppe + démarche).
    pub fn set_resultats(&mut self, valeur: f64, enveloppe: impl Into<String>, demarche: Demarche) {
        self.pousser_historique(Ok(valeur));

        self.erreur.clear();
        self.resultat = format!("{valeur}");
        self.enveloppe = enveloppe.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    fn pousser_historique(&mut self, sortie: Result<f64, String>) {
        self.historique.push_front(LigneHistorique {
            entree: self.entree.trim().to_string(),
            sortie,
        });
        self.historique.truncate(self.historique_max);
    }
}
