//! src/reglages.rs
//!
//! Réglages de la coquille (fenêtre, police, journal).
//!
//! Source : `<config_dir>/calculatrice-sci/reglages.toml` (natif seulement).
//! - fichier absent          => valeurs par défaut (silencieux)
//! - fichier illisible/faux  => `ErreurReglages` (main : avertissement + défauts)
//! - valeurs bornées (anti fenêtre minuscule / police géante)
//!
//! Exemple :
//! ```toml
//! largeur = 600.0
//! hauteur = 700.0
//! taille_police = 16.0
//! journal = "debug"
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

const LARGEUR_DEFAUT: f32 = 600.0;
const HAUTEUR_DEFAUT: f32 = 700.0;
const POLICE_DEFAUT: f32 = 16.0;
const JOURNAL_DEFAUT: &str = "info";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub largeur: f32,
    pub hauteur: f32,
    /// Taille de la police de l’écran (points).
    pub taille_police: f32,
    /// Filtre tracing (ex: "info", "calculatrice_sci=debug"). RUST_LOG a priorité.
    pub journal: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            largeur: LARGEUR_DEFAUT,
            hauteur: HAUTEUR_DEFAUT,
            taille_police: POLICE_DEFAUT,
            journal: JOURNAL_DEFAUT.to_string(),
        }
    }
}

impl Reglages {
    /// Lit un texte TOML ; les champs absents prennent leur valeur par défaut.
    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        let r: Reglages = toml::from_str(texte)?;
        Ok(r.bornes())
    }

    fn bornes(mut self) -> Self {
        self.largeur = self.largeur.clamp(420.0, 4000.0);
        self.hauteur = self.hauteur.clamp(520.0, 4000.0);
        self.taille_police = self.taille_police.clamp(8.0, 48.0);
        if self.journal.trim().is_empty() {
            self.journal = JOURNAL_DEFAUT.to_string();
        }
        self
    }

    /// Charge le fichier utilisateur (natif). Fichier absent => défauts.
    /// En cas d’erreur, l’appelant journalise puis garde les défauts.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> Result<Self, ErreurReglages> {
        let Some(dossier) = dirs::config_dir() else {
            return Ok(Self::default());
        };
        let chemin = dossier.join("calculatrice-sci").join("reglages.toml");

        let texte = match std::fs::read_to_string(&chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => return Err(ErreurReglages::Lecture { chemin, source }),
        };

        Self::depuis_toml(&texte).map_err(|source| ErreurReglages::Format { chemin, source })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn charger() -> Result<Self, ErreurReglages> {
        Ok(Self::default())
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("réglages illisibles ({}) : {source}", chemin.display())]
    Lecture {
        chemin: PathBuf,
        source: std::io::Error,
    },
    #[error("réglages invalides ({}) : {source}", chemin.display())]
    Format {
        chemin: PathBuf,
        source: toml::de::Error,
    },
}
