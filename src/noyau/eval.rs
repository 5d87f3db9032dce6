//! Noyau — évaluation restreinte (pipeline réel)
//!
//! équilibrage des parenthèses -> jetons -> RPN -> contrôle des noms -> valeur
//!
//! Aucun chemin vers autre chose que NomsAutorises : un nom inconnu est refusé
//! AVANT le moindre calcul (rien n’est exécuté).

use std::borrow::Cow;

use super::erreur::ErreurEvaluation;
use super::jetons::{format_tokens, tokenize};
use super::noms::{noms_autorises, NomsAutorises};
use super::rpn::{eval_rpn, format_rpn, to_rpn, Rpn};
use super::valeur::Valeur;

/// Ajoute les ')' manquants (max(0, ouvrantes - fermantes)).
/// N’ouvre jamais, ne retire jamais de ')' en trop.
pub fn equilibrer_parentheses(s: &str) -> Cow<'_, str> {
    let ouvrantes = s.chars().filter(|&c| c == '(').count();
    let fermantes = s.chars().filter(|&c| c == ')').count();
    if ouvrantes <= fermantes {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + ouvrantes - fermantes);
    out.push_str(s);
    out.extend(std::iter::repeat(')').take(ouvrantes - fermantes));
    Cow::Owned(out)
}

/// API publique : évalue une expression contre l’ensemble global des noms autorisés.
pub fn evaluer(expr_str: &str) -> Result<Valeur, ErreurEvaluation> {
    evaluer_avec(expr_str, noms_autorises())
}

/// Idem, avec un ensemble de noms explicite.
pub fn evaluer_avec(expr_str: &str, noms: &NomsAutorises) -> Result<Valeur, ErreurEvaluation> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurEvaluation::Vide);
    }

    // 1) Parenthèses
    let s = equilibrer_parentheses(s);

    // 2) Jetons
    let jetons = tokenize(&s)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(jetons = %format_tokens(&jetons), rpn = %format_rpn(&rpn), "analyse");

    // 4) Noms : tout doit être autorisé avant d’évaluer quoi que ce soit
    verifier_noms(&rpn, noms)?;

    // 5) Valeur
    eval_rpn(&rpn, noms)
}

fn verifier_noms(rpn: &[Rpn], noms: &NomsAutorises) -> Result<(), ErreurEvaluation> {
    for item in rpn {
        if let Rpn::Nom(n) | Rpn::Appel(n, _) = item {
            if !noms.contient(n) {
                return Err(ErreurEvaluation::NomInconnu(n.clone()));
            }
        }
    }
    Ok(())
}
