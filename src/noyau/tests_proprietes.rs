//! Tests de propriétés : le contrat observable de `evaluer`, message exact compris.

use super::{evaluer, evaluer_opt};

fn ok(expr: &str) -> f64 {
    evaluer(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn err(expr: &str) -> String {
    match evaluer(expr) {
        Ok(v) => panic!("expr={expr:?} aurait dû échouer, valeur={v}"),
        Err(e) => e.to_string(),
    }
}

/* ------------------------ Valeurs ------------------------ */

#[test]
fn nombre_seul() {
    assert_eq!(ok("3"), 3.0);
    assert_eq!(ok("0"), 0.0);
    assert_eq!(ok("42.125"), 42.125);
}

#[test]
fn precedence() {
    assert_eq!(ok("10 + 2 * 6"), 22.0);
}

#[test]
fn associativite_gauche() {
    assert_eq!(ok("20 / 5 + 3"), 7.0);
    assert_eq!(ok("100 / 10 / 5"), 2.0);
    assert_eq!(ok("8 - 3 - 2"), 3.0);
}

#[test]
fn parentheses() {
    assert_eq!(ok("2 * ( 3+ 4)"), 14.0);
    assert_eq!(ok("(2 + (3 * 2)) * 2"), 16.0);
}

#[test]
fn moins_unaire() {
    assert_eq!(ok("-1 + 2"), 1.0);
    assert_eq!(ok("-3 + 5"), 2.0);
    assert_eq!(ok("2 * (-3 + 1)"), -4.0);
}

#[test]
fn decimaux() {
    assert_eq!(ok("1 + 2.5"), 3.5);
    assert_eq!(ok("0.5 * 4"), 2.0);
}

#[test]
fn espaces_de_toutes_sortes() {
    assert_eq!(ok("\t1 +\n 2 "), 3.0);
}

/* ------------------------ Rejets (validation, message nu) ------------------------ */

#[test]
fn absent_ou_vide() {
    let attendu = "Expression cannot be null or empty!";
    assert_eq!(err(""), attendu);
    assert_eq!(evaluer_opt(None).unwrap_err().to_string(), attendu);
    // que des espaces : vide une fois nettoyée
    assert_eq!(err("   "), attendu);
}

#[test]
fn caracteres_invalides() {
    assert_eq!(err("2 + 3a"), "Expression contains invalid characters!");
    assert_eq!(err("2 ^ 3"), "Expression contains invalid characters!");
}

#[test]
fn parentheses_desequilibrees() {
    assert_eq!(err("(2 + 3"), "Unmatched opening parenthesis");
    assert_eq!(err("2 + 3)"), "Unmatched closing parenthesis");
}

#[test]
fn operateur_en_bordure() {
    let attendu = "Expression cannot start or end with an operator";
    assert_eq!(err("+2+3"), attendu);
    assert_eq!(err("2+3*"), attendu);
}

#[test]
fn parentheses_vides() {
    assert_eq!(err("2 + ()"), "Empty parentheses found");
}

#[test]
fn division_par_zero_litterale() {
    assert_eq!(err("4 / 0"), "Division by zero detected");
}

/* ------------------------ Rejets (calcul, préfixés) ------------------------ */

#[test]
fn division_par_zero_calculee() {
    assert_eq!(err("4 / (2 - 2)"), "Invalid expression: Division by zero");
}

#[test]
fn format_invalide() {
    assert_eq!(err("2 * -3"), "Invalid expression: Invalid expression format");
    assert_eq!(err("-(2 + 3)"), "Invalid expression: Invalid expression format");
    assert_eq!(err("2(3)"), "Invalid expression: Invalid expression format");
    assert_eq!(err("1.2.3 + 1"), "Invalid expression: Invalid expression format");
}

#[test]
fn la_validation_passe_avant_le_calcul() {
    // "/0" textuel gagne même si la division ne serait jamais atteinte
    assert_eq!(err("2(3)/0"), "Division by zero detected");
}

/* ------------------------ Pureté ------------------------ */

#[test]
fn idempotence() {
    for e in ["10 + 2 * 6", "4 / (2 - 2)", "2 + ()", "-1.5 * (2 - 7)"] {
        let a = evaluer(e);
        let b = evaluer(e);
        assert_eq!(a, b, "expr={e:?}");
    }
}

#[test]
fn appels_concurrents() {
    let fils: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || evaluer(&format!("{i} * (2 + 3)"))))
        .collect();

    for (i, f) in fils.into_iter().enumerate() {
        let v = f.join().expect("thread").expect("évaluation");
        assert_eq!(v, i as f64 * 5.0);
    }
}
