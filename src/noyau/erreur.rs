//! Noyau — taxonomie des erreurs
//!
//! Trois familles, toutes récupérables :
//! - ErreurDomaine     : opération mathématiquement indéfinie (√-1, 0!, log 0…)
//! - ErreurEvaluation  : expression mal formée / nom non autorisé / arité
//! - ErreurConversion  : conversion de base impossible
//!
//! `ErreurCalc` regroupe le tout pour l’aiguillage des touches (session.rs).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurDomaine {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("{fonction} : argument hors domaine ({valeur})")]
    HorsDomaine {
        fonction: &'static str,
        valeur: String,
    },

    #[error("{0} : argument complexe non supporté")]
    ArgumentComplexe(&'static str),

    #[error("{0} : résultat hors de portée")]
    Depassement(&'static str),
}

impl ErreurDomaine {
    pub(crate) fn hors_domaine(fonction: &'static str, valeur: f64) -> Self {
        ErreurDomaine::HorsDomaine {
            fonction,
            valeur: super::valeur::format_reel(valeur),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEvaluation {
    #[error("entrée vide")]
    Vide,

    #[error("caractère inattendu : '{0}'")]
    Caractere(char),

    #[error("nombre invalide : {0}")]
    Nombre(String),

    #[error("nom non autorisé : '{0}'")]
    NomInconnu(String),

    #[error("'{0}' n’est pas une fonction")]
    PasUneFonction(String),

    #[error("'{0}' est une fonction : il manque ses parenthèses")]
    FonctionSansAppel(String),

    #[error("{nom}() attend {attendu} argument(s), {recu} donné(s)")]
    Arite {
        nom: String,
        attendu: &'static str,
        recu: usize,
    },

    #[error("syntaxe invalide : {0}")]
    Syntaxe(&'static str),

    #[error("opération invalide : {0}")]
    Type(&'static str),

    #[error(transparent)]
    Domaine(#[from] ErreurDomaine),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurConversion {
    #[error("aucune réponse en mémoire (ANS vide)")]
    AucuneReponse,

    #[error("ANS n’est pas un entier convertible : {0}")]
    NonEntier(String),
}

/// Erreur rendue par `Session::appuyer` (message pour la fenêtre modale).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    #[error(transparent)]
    Evaluation(#[from] ErreurEvaluation),

    #[error(transparent)]
    Conversion(#[from] ErreurConversion),

    #[error("touche inconnue : '{0}'")]
    ToucheInconnue(String),
}
