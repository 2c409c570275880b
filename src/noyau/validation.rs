// src/noyau/validation.rs
//
// Validateur : contrôles sur la chaîne ENTIÈRE, avant toute arithmétique.
// Ordre fixe, premier échec = raison rapportée (pas d’accumulation).
//
// Attention : le contrôle `/0` est textuel. "4/(2-2)" passe ici et échoue
// plus tard, au calcul, avec un autre message. Ne pas fusionner les deux.

use super::erreur::ErreurValidation;

/// Alphabet accepté : chiffres, point décimal, 4 opérateurs, parenthèses.
fn est_autorise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

/// Valide une expression déjà débarrassée de ses espaces.
pub fn valider(expr: &str) -> Result<(), ErreurValidation> {
    // 1) vide
    if expr.is_empty() {
        return Err(ErreurValidation::Vide);
    }

    // 2) alphabet
    if !expr.chars().all(est_autorise) {
        return Err(ErreurValidation::CaracteresInvalides);
    }

    // 3) équilibre des parenthèses (compteur courant)
    verifier_parentheses(expr)?;

    // 4) bordures : '-' permis en tête (moins unaire), aucun opérateur en queue
    if expr.starts_with(['+', '*', '/']) || expr.ends_with(['+', '-', '*', '/']) {
        return Err(ErreurValidation::OperateurEnBordure);
    }

    // 5) parenthèses vides
    if expr.contains("()") {
        return Err(ErreurValidation::ParenthesesVides);
    }

    // 6) division par zéro littérale
    if expr.contains("/0") {
        return Err(ErreurValidation::DivisionParZeroLitterale);
    }

    Ok(())
}

fn verifier_parentheses(expr: &str) -> Result<(), ErreurValidation> {
    let mut ouvertes: i64 = 0;

    for c in expr.chars() {
        match c {
            '(' => ouvertes += 1,
            ')' => ouvertes -= 1,
            _ => {}
        }
        if ouvertes < 0 {
            return Err(ErreurValidation::FermanteOrpheline);
        }
    }

    if ouvertes != 0 {
        return Err(ErreurValidation::OuvranteOrpheline);
    }
    Ok(())
}
