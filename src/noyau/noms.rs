// src/noyau/noms.rs
//
// Ensemble des noms autorisés (seul espace de noms visible par l’évaluateur).
//
// - Construit UNE fois (OnceLock), complet dès le départ (csc/sec/cot inclus),
//   puis immuable : partageable entre threads sans verrou.
// - Ne contient que des fonctions numériques pures et des constantes.
//   Aucun nom ne donne accès à l’environnement, aux fichiers ou au processus.
// - Sensible à la casse : "nPr", "toPolar", "toRec".

use std::collections::HashMap;
use std::sync::OnceLock;

use num_complex::Complex64;

use super::erreur::{ErreurDomaine, ErreurEvaluation};
use super::fonctions as f;
use super::valeur::Valeur;

#[derive(Clone, Copy)]
pub enum Fonction {
    Zero(fn() -> Valeur),
    Unaire(fn(f64) -> Result<Valeur, ErreurDomaine>),
    Binaire(fn(f64, f64) -> Result<Valeur, ErreurDomaine>),
    /// toPolar : seul appel qui accepte un complexe.
    Polaire,
    /// toRec : (r, θ) ou un couple (r, θ).
    Rectangulaire,
}

#[derive(Clone, Copy)]
pub enum Entree {
    Constante(Valeur),
    Fonction(Fonction),
}

pub struct NomsAutorises {
    table: HashMap<&'static str, Entree>,
}

/// Accès global (construit au premier appel).
pub fn noms_autorises() -> &'static NomsAutorises {
    static NOMS: OnceLock<NomsAutorises> = OnceLock::new();
    NOMS.get_or_init(NomsAutorises::construire)
}

impl NomsAutorises {
    fn construire() -> Self {
        use Fonction::*;

        let constantes: [(&'static str, Valeur); 3] = [
            ("pi", Valeur::Reel(std::f64::consts::PI)),
            ("e", Valeur::Reel(std::f64::consts::E)),
            ("j", Valeur::Complexe(Complex64::new(0.0, 1.0))),
        ];

        let fonctions: [(&'static str, Fonction); 26] = [
            ("sqrt", Unaire(f::sqrt)),
            ("sin", Unaire(f::sin)),
            ("cos", Unaire(f::cos)),
            ("tan", Unaire(f::tan)),
            ("arcsin", Unaire(f::arcsin)),
            ("arccos", Unaire(f::arccos)),
            ("arctan", Unaire(f::arctan)),
            ("csc", Unaire(f::csc)),
            ("sec", Unaire(f::sec)),
            ("cot", Unaire(f::cot)),
            ("log", Unaire(f::log)),
            ("ln", Unaire(f::ln)),
            ("factorial", Unaire(f::factorial)),
            ("cube", Unaire(f::cube)),
            ("square", Unaire(f::square)),
            ("cuberoot", Unaire(f::cuberoot)),
            ("ten_pow", Unaire(f::ten_pow)),
            ("e_pow", Unaire(f::e_pow)),
            ("recip", Unaire(f::recip)),
            ("nPr", Binaire(f::permutations)),
            ("nCr", Binaire(f::combinations)),
            ("root", Binaire(f::root)),
            ("power", Binaire(f::power)),
            ("toPolar", Polaire),
            ("toRec", Rectangulaire),
            ("random", Zero(f::random)),
        ];

        let mut table = HashMap::with_capacity(constantes.len() + fonctions.len());
        for (nom, v) in constantes {
            table.insert(nom, Entree::Constante(v));
        }
        for (nom, fx) in fonctions {
            table.insert(nom, Entree::Fonction(fx));
        }
        Self { table }
    }

    pub fn contient(&self, nom: &str) -> bool {
        self.table.contains_key(nom)
    }

    /// Noms triés.
    #[cfg(test)]
    pub fn noms(&self) -> Vec<&'static str> {
        let mut v: Vec<&'static str> = self.table.keys().copied().collect();
        v.sort_unstable();
        v
    }

    /// Résout un nom nu (sans parenthèses) : constante seulement.
    pub fn constante(&self, nom: &str) -> Result<Valeur, ErreurEvaluation> {
        match self.table.get(nom) {
            Some(Entree::Constante(v)) => Ok(*v),
            Some(Entree::Fonction(_)) => Err(ErreurEvaluation::FonctionSansAppel(nom.to_string())),
            None => Err(ErreurEvaluation::NomInconnu(nom.to_string())),
        }
    }

    /// Appelle une fonction autorisée avec des arguments déjà évalués.
    pub fn appeler(&self, nom: &str, args: &[Valeur]) -> Result<Valeur, ErreurEvaluation> {
        let (cle, entree) = self
            .table
            .get_key_value(nom)
            .ok_or_else(|| ErreurEvaluation::NomInconnu(nom.to_string()))?;
        let cle: &'static str = *cle;

        let fx = match entree {
            Entree::Fonction(fx) => *fx,
            Entree::Constante(_) => return Err(ErreurEvaluation::PasUneFonction(nom.to_string())),
        };

        let arite = |attendu: &'static str| ErreurEvaluation::Arite {
            nom: cle.to_string(),
            attendu,
            recu: args.len(),
        };

        match fx {
            Fonction::Zero(g) => {
                if !args.is_empty() {
                    return Err(arite("0"));
                }
                Ok(g())
            }
            Fonction::Unaire(g) => match args {
                [x] => Ok(g(arg_reel(*x, cle)?)?),
                _ => Err(arite("1")),
            },
            Fonction::Binaire(g) => match args {
                [x, y] => Ok(g(arg_reel(*x, cle)?, arg_reel(*y, cle)?)?),
                _ => Err(arite("2")),
            },
            Fonction::Polaire => match args {
                [x] => {
                    let z = x
                        .vers_complexe()
                        .ok_or(ErreurEvaluation::Type("toPolar attend un nombre, pas un couple"))?;
                    Ok(f::to_polar(z)?)
                }
                _ => Err(arite("1")),
            },
            Fonction::Rectangulaire => match args {
                [Valeur::Couple(r, t)] => Ok(f::to_rec(*r, *t)?),
                [_] => Err(ErreurEvaluation::Type("toRec attend (r, θ)")),
                [r, t] => Ok(f::to_rec(arg_reel(*r, cle)?, arg_reel(*t, cle)?)?),
                _ => Err(arite("1 ou 2")),
            },
        }
    }
}

/// Argument réel : un complexe est une erreur de domaine, un couple une erreur de type.
fn arg_reel(v: Valeur, fonction: &'static str) -> Result<f64, ErreurEvaluation> {
    match v {
        Valeur::Reel(x) => Ok(x),
        Valeur::Complexe(_) => Err(ErreurDomaine::ArgumentComplexe(fonction).into()),
        Valeur::Couple(..) => Err(ErreurEvaluation::Type("couple passé à une fonction réelle")),
    }
}
