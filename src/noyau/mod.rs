//! Noyau validant (f64)
//!
//! Organisation interne :
//! - erreur.rs     : ensemble fermé des raisons d’échec
//! - validation.rs : contrôles textuels, avant toute arithmétique
//! - jetons.rs     : tokenisation (moins unaire par regard arrière)
//! - eval.rs       : pipeline complet + réduction à deux piles

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod validation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ExpressionInvalide;
pub use eval::{evaluer, evaluer_avec_demarche, evaluer_opt};
