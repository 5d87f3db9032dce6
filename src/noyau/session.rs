//! Noyau — session de calcul (aiguillage des touches)
//!
//! État : tampon d’expression + dernière réponse (ANS).
//! Contrat avec la coquille (vue) :
//! - entrée : identifiants de touches ("7", "sin", "EXE", "HEX"…)
//! - sortie : `tampon()` à afficher ; en cas d’erreur, un message (Display)
//!
//! Aucune mutation partielle : une touche qui échoue laisse tampon et ANS intacts.

use std::fmt;
use std::str::FromStr;

use super::conversion::{convertir, Base};
use super::erreur::{ErreurCalc, ErreurConversion, ErreurEvaluation};
use super::eval::evaluer;
use super::insertion::fragment;
use super::tampon::Tampon;
use super::valeur::Valeur;

/// Touches qui insèrent leur propre texte.
const LITTERAUX: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", ",", "+", "-", "*", "/", "(", ")", "pi",
    "e",
];

/// Dernière réponse : une valeur (EXE) ou un texte (conversion de base).
#[derive(Clone, Debug, PartialEq)]
pub enum Reponse {
    Valeur(Valeur),
    Texte(String),
}

impl fmt::Display for Reponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reponse::Valeur(v) => write!(f, "{v}"),
            Reponse::Texte(t) => f.write_str(t),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Ajoute un fragment au tampon (chiffre, opérateur, "sin("…).
    Inserer(&'static str),
    Reponse,
    Executer,
    Effacer,
    Supprimer,
    Convertir(Base),
}

impl FromStr for Touche {
    type Err = ErreurCalc;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let t = match id {
            "EXE" => Touche::Executer,
            "ANS" => Touche::Reponse,
            "CLEAR" => Touche::Effacer,
            "DELETE" => Touche::Supprimer,
            _ => {
                if let Some(b) = Base::depuis_touche(id) {
                    Touche::Convertir(b)
                } else if let Some(f) = fragment(id) {
                    Touche::Inserer(f)
                } else if let Some(l) = LITTERAUX.iter().find(|l| **l == id) {
                    Touche::Inserer(*l)
                } else {
                    return Err(ErreurCalc::ToucheInconnue(id.to_string()));
                }
            }
        };
        Ok(t)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    tampon: Tampon,
    derniere: Option<Reponse>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texte à afficher.
    pub fn tampon(&self) -> &str {
        self.tampon.texte()
    }

    #[cfg(test)]
    pub fn derniere_reponse(&self) -> Option<&Reponse> {
        self.derniere.as_ref()
    }

    /// Point d’entrée de la coquille : un identifiant de touche.
    pub fn appuyer(&mut self, id: &str) -> Result<(), ErreurCalc> {
        let touche: Touche = id.parse()?;
        self.touche(touche)
    }

    pub fn touche(&mut self, touche: Touche) -> Result<(), ErreurCalc> {
        match touche {
            Touche::Inserer(f) => self.tampon.ajouter(f),
            Touche::Reponse => self.inserer_reponse(),
            Touche::Effacer => self.tampon.vider(),
            Touche::Supprimer => self.tampon.supprimer_dernier(),
            Touche::Executer => {
                self.executer()?;
            }
            Touche::Convertir(base) => {
                self.convertir(base)?;
            }
        }
        Ok(())
    }

    /// ANS : ajoute le texte de la dernière réponse (rien si aucune).
    pub fn inserer_reponse(&mut self) {
        if let Some(r) = &self.derniere {
            self.tampon.ajouter(&r.to_string());
        }
    }

    /// EXE : évalue le tampon (parenthèses auto-fermées).
    /// Succès : ANS = résultat, tampon = forme canonique. Échec : rien ne change.
    pub fn executer(&mut self) -> Result<Valeur, ErreurEvaluation> {
        match evaluer(self.tampon.texte()) {
            Ok(v) => {
                tracing::debug!(expression = self.tampon.texte(), resultat = %v, "EXE");
                self.tampon.remplacer(v.to_string());
                self.derniere = Some(Reponse::Valeur(v));
                Ok(v)
            }
            Err(e) => {
                tracing::debug!(expression = self.tampon.texte(), erreur = %e, "EXE refusé");
                Err(e)
            }
        }
    }

    /// HEX/BIN/DEC/OCT : convertit ANS ; tampon et ANS deviennent le texte produit.
    pub fn convertir(&mut self, base: Base) -> Result<String, ErreurConversion> {
        let texte = convertir(self.derniere.as_ref(), base).inspect_err(|e| {
            tracing::debug!(?base, erreur = %e, "conversion refusée");
        })?;
        self.tampon.remplacer(texte.clone());
        self.derniere = Some(Reponse::Texte(texte.clone()));
        Ok(texte)
    }
}
