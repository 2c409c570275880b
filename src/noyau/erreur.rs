// src/noyau/erreur.rs
//
// Ensemble FERMÉ de raisons d’échec (messages littéraux stables).
//
// - ErreurValidation : rejet textuel, avant toute arithmétique (message nu)
// - ErreurCalcul     : échec pendant jetons / réduction à deux piles
// - ExpressionInvalide : l’unique type vu par l’appelant ; un échec de calcul
//   y est préfixé par "Invalid expression: ".

/// Raisons de rejet du validateur, dans l’ordre où elles sont vérifiées.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurValidation {
    #[error("Expression cannot be null or empty!")]
    Vide,

    #[error("Expression contains invalid characters!")]
    CaracteresInvalides,

    #[error("Unmatched closing parenthesis")]
    FermanteOrpheline,

    #[error("Unmatched opening parenthesis")]
    OuvranteOrpheline,

    #[error("Expression cannot start or end with an operator")]
    OperateurEnBordure,

    #[error("Empty parentheses found")]
    ParenthesesVides,

    /// Heuristique textuelle (`/0` littéral), distincte de [`ErreurCalcul::DivisionParZero`].
    #[error("Division by zero detected")]
    DivisionParZeroLitterale,
}

/// Échecs sémantiques de l’évaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurCalcul {
    #[error("Division by zero")]
    DivisionParZero,

    #[error("Invalid expression format")]
    FormatInvalide,

    #[error("Unknown operator: {0}")]
    OperateurInconnu(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionInvalide {
    #[error(transparent)]
    Validation(#[from] ErreurValidation),

    #[error("Invalid expression: {0}")]
    Calcul(#[from] ErreurCalcul),
}
