//! Noyau — évaluation (pipeline réel)
//!
//! brut -> sans espaces -> validation -> jetons -> réduction à deux piles -> f64
//!
//! Aucun état partagé : chaque appel alloue ses propres piles.

use tracing::{debug, trace};

use super::erreur::{ErreurCalcul, ErreurValidation, ExpressionInvalide};
use super::jetons::{format_jetons, tokenize, Jeton, Operateur};
use super::validation::valider;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    /// Expression sans espaces, telle que validée.
    pub nettoyee: String,
    pub jetons: String,
    /// Une ligne par opérateur appliqué : "a op b = r".
    pub etapes: Vec<String>,
}

/// API publique : valeur de l’expression, ou raison du rejet.
pub fn evaluer(expression: &str) -> Result<f64, ExpressionInvalide> {
    evaluer_avec_demarche(expression).map(|(valeur, _)| valeur)
}

/// Variante "absente possible" (ex: champ JSON null) : absent == vide.
pub fn evaluer_opt(expression: Option<&str>) -> Result<f64, ExpressionInvalide> {
    match expression {
        Some(s) => evaluer(s),
        None => Err(ErreurValidation::Vide.into()),
    }
}

/// Comme [`evaluer`], en gardant la démarche (jetons + étapes) pour l’affichage.
pub fn evaluer_avec_demarche(expression: &str) -> Result<(f64, DemarcheNoyau), ExpressionInvalide> {
    let nettoyee: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    debug!(expression = %nettoyee, "évaluation");

    if let Err(e) = valider(&nettoyee) {
        debug!(raison = %e, "expression rejetée à la validation");
        return Err(e.into());
    }

    match calculer(&nettoyee) {
        Ok((valeur, jetons, etapes)) => {
            debug!(valeur, "expression évaluée");
            let d = DemarcheNoyau {
                nettoyee,
                jetons: format_jetons(&jetons),
                etapes,
            };
            Ok((valeur, d))
        }
        Err(e) => {
            debug!(raison = %e, "échec pendant l’évaluation");
            Err(e.into())
        }
    }
}

fn calculer(expr: &str) -> Result<(f64, Vec<Jeton>, Vec<String>), ErreurCalcul> {
    let jetons = tokenize(expr)?;
    let mut piles = DeuxPiles::default();
    let valeur = piles.reduire(&jetons)?;
    Ok((valeur, jetons, piles.etapes))
}

/* ------------------------ Réduction à deux piles ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
enum Marqueur {
    Op(Operateur),
    LPar,
}

#[derive(Default, Debug)]
struct DeuxPiles {
    operandes: Vec<f64>,
    operateurs: Vec<Marqueur>,
    etapes: Vec<String>,
}

impl DeuxPiles {
    /// Consomme les jetons dans l’ordre ; à la fin, exactement UNE valeur doit rester.
    fn reduire(&mut self, jetons: &[Jeton]) -> Result<f64, ErreurCalcul> {
        for jeton in jetons {
            match *jeton {
                Jeton::Nombre(v) => self.operandes.push(v),

                Jeton::LPar => self.operateurs.push(Marqueur::LPar),

                Jeton::RPar => {
                    while let Some(Marqueur::Op(_)) = self.operateurs.last() {
                        self.appliquer()?;
                    }
                    // pile vide ici : cas déjà écarté par la validation, on ne
                    // signale rien
                    if let Some(Marqueur::LPar) = self.operateurs.last() {
                        self.operateurs.pop();
                    }
                }

                Jeton::Op(op) => {
                    while let Some(&Marqueur::Op(haut)) = self.operateurs.last() {
                        if haut.precedence() < op.precedence() {
                            break;
                        }
                        self.appliquer()?;
                    }
                    self.operateurs.push(Marqueur::Op(op));
                }
            }
        }

        while !self.operateurs.is_empty() {
            self.appliquer()?;
        }

        if self.operandes.len() != 1 {
            return Err(ErreurCalcul::FormatInvalide);
        }
        self.operandes.pop().ok_or(ErreurCalcul::FormatInvalide)
    }

    /// Dépile un opérateur et ses deux opérandes (b d’abord, puis a), empile `a op b`.
    fn appliquer(&mut self) -> Result<(), ErreurCalcul> {
        if self.operandes.len() < 2 || self.operateurs.is_empty() {
            return Err(ErreurCalcul::FormatInvalide);
        }

        let op = match self.operateurs.pop() {
            Some(Marqueur::Op(op)) => op,
            Some(Marqueur::LPar) => return Err(ErreurCalcul::OperateurInconnu("(".into())),
            None => return Err(ErreurCalcul::FormatInvalide),
        };
        let b = self.operandes.pop().ok_or(ErreurCalcul::FormatInvalide)?;
        let a = self.operandes.pop().ok_or(ErreurCalcul::FormatInvalide)?;

        let r = match op {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                if b == 0.0 {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
        };

        trace!(a, b, op = %op.symbole(), r, "réduction");
        self.etapes.push(format!("{a} {} {b} = {r}", op.symbole()));
        self.operandes.push(r);
        Ok(())
    }
}
