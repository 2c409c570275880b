//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : toute erreur appartient à l’ensemble fermé des messages

use std::time::{Duration, Instant};

use super::evaluer;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

const MESSAGES_VALIDATION: [&str; 7] = [
    "Expression cannot be null or empty!",
    "Expression contains invalid characters!",
    "Unmatched closing parenthesis",
    "Unmatched opening parenthesis",
    "Expression cannot start or end with an operator",
    "Empty parentheses found",
    "Division by zero detected",
];

fn est_message_connu(msg: &str) -> bool {
    if MESSAGES_VALIDATION.contains(&msg) {
        return true;
    }
    match msg.strip_prefix("Invalid expression: ") {
        Some(raison) => {
            raison == "Division by zero"
                || raison == "Invalid expression format"
                || raison.starts_with("Unknown operator: ")
        }
        None => false,
    }
}

/* ------------------------ Génération (bornée) ------------------------ */

/// Soupe de caractères de l’alphabet (+ un intrus de temps en temps).
fn gen_soupe(rng: &mut Rng, longueur: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789.+-*/() ";
    let mut s = String::with_capacity(longueur);
    for _ in 0..longueur {
        if rng.pick(50) == 0 {
            s.push('x');
        } else {
            s.push(ALPHABET[rng.pick(ALPHABET.len() as u32) as usize] as char);
        }
    }
    s
}

/// Expression entièrement parenthésée + sa valeur de référence
/// (None si une division par zéro survient en chemin).
fn gen_expr(rng: &mut Rng, profondeur: u32) -> (String, Option<f64>) {
    if profondeur == 0 || rng.pick(4) == 0 {
        let n = rng.pick(20) as f64 / if rng.coin() { 1.0 } else { 4.0 };
        if rng.pick(5) == 0 {
            return (format!("(-{n})"), Some(-n));
        }
        return (format!("{n}"), Some(n));
    }

    let (ga, va) = gen_expr(rng, profondeur - 1);
    let (gb, vb) = gen_expr(rng, profondeur - 1);
    let (sym, v) = match rng.pick(4) {
        0 => ('+', va.zip(vb).map(|(a, b)| a + b)),
        1 => ('-', va.zip(vb).map(|(a, b)| a - b)),
        2 => ('*', va.zip(vb).map(|(a, b)| a * b)),
        _ => ('/', va.zip(vb).and_then(|(a, b)| (b != 0.0).then(|| a / b))),
    };

    // diviseur toujours entre parenthèses : jamais de "/0" textuel
    (format!("({ga} {sym} ({gb}))"), v)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_soupe_messages_fermes_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let longueur = 1 + rng.pick(12) as usize;
        let expr = gen_soupe(&mut rng, longueur);

        let premier = evaluer(&expr);
        assert_eq!(premier, evaluer(&expr), "non déterministe: expr={expr:?}");

        match premier {
            Ok(_) => seen_ok += 1,
            Err(e) => {
                let msg = e.to_string();
                assert!(est_message_connu(&msg), "message inconnu: expr={expr:?} err={msg}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn fuzz_safe_expressions_parenthesees_contre_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let (expr, reference) = gen_expr(&mut rng, 4);
        match (evaluer(&expr), reference) {
            (Ok(v), Some(r)) => {
                // même ordre d’opérations => même f64, au bit près
                assert!(v == r || (v.is_nan() && r.is_nan()), "expr={expr:?} v={v} r={r}");
            }
            (Err(e), None) => {
                assert_eq!(e.to_string(), "Invalid expression: Division by zero", "expr={expr:?}");
            }
            (obtenu, attendu) => panic!("expr={expr:?} obtenu={obtenu:?} attendu={attendu:?}"),
        }
    }
}

#[test]
fn fuzz_safe_somme_longue_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 2000].join("+");
    let v = evaluer(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 1000.0);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let profondeur = 500;
    let expr = format!("{}1{}", "(".repeat(profondeur), ")".repeat(profondeur));
    assert_eq!(evaluer(&expr), Ok(1.0));
}
