//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreur.rs     : ErreurDomaine / ErreurEvaluation / ErreurConversion
//! - valeur.rs     : réel / complexe / couple + forme texte canonique
//! - fonctions.rs  : bibliothèque numérique (trig, nPr/nCr, toPolar/toRec…)
//! - noms.rs       : ensemble des noms autorisés (immuable)
//! - jetons.rs     : tokenisation
//! - rpn.rs        : shunting-yard + évaluation RPN
//! - eval.rs       : pipeline complet (auto-fermeture des parenthèses)
//! - insertion.rs  : table touche -> fragment
//! - tampon.rs     : expression en cours (ajout / DEL / effacer)
//! - conversion.rs : HEX / BIN / DEC / OCT
//! - session.rs    : aiguillage des touches

pub mod conversion;
pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod insertion;
pub mod jetons;
pub mod noms;
pub mod rpn;
pub mod session;
pub mod tampon;
pub mod valeur;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use session::Session;
