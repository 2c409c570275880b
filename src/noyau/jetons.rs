// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    /// `+ -` → 1 ; `* /` → 2. Égalité => associativité à gauche.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Divise => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une expression SANS espaces (déjà nettoyée).
///
/// Règles:
/// - chiffres et '.' s’accumulent dans le littéral en cours
/// - '-' rejoint le littéral (signe) seulement en tête ou juste après '(' ;
///   ailleurs c’est l’opérateur binaire
/// - tout autre caractère vide le littéral en cours puis devient son propre jeton
///
/// Un littéral réduit à "-" (ex: "-(1)") redevient l’opérateur `-` ;
/// la réduction échouera ensuite faute d’opérande gauche.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out = Vec::new();
    let mut courant = String::new();
    let mut precedent: Option<char> = None;

    for c in s.chars() {
        let signe = c == '-' && matches!(precedent, None | Some('('));

        if c.is_ascii_digit() || c == '.' || signe {
            courant.push(c);
        } else {
            vider_litteral(&mut courant, &mut out)?;
            out.push(jeton_simple(c)?);
        }

        precedent = Some(c);
    }

    vider_litteral(&mut courant, &mut out)?;
    Ok(out)
}

fn vider_litteral(courant: &mut String, out: &mut Vec<Jeton>) -> Result<(), ErreurCalcul> {
    if courant.is_empty() {
        return Ok(());
    }

    let jeton = match courant.parse::<f64>() {
        Ok(v) => Jeton::Nombre(v),
        Err(_) if courant.as_str() == "-" => Jeton::Op(Operateur::Moins),
        // "1.2.3", ".", "-." ...
        Err(_) => return Err(ErreurCalcul::FormatInvalide),
    };

    out.push(jeton);
    courant.clear();
    Ok(())
}

fn jeton_simple(c: char) -> Result<Jeton, ErreurCalcul> {
    match c {
        '(' => Ok(Jeton::LPar),
        ')' => Ok(Jeton::RPar),
        _ => Operateur::depuis_char(c)
            .map(Jeton::Op)
            .ok_or_else(|| ErreurCalcul::OperateurInconnu(c.to_string())),
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|t| match t {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Op(op) => op.symbole().to_string(),
            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
