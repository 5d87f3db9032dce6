//! src/app/etat.rs
//!
//! État UI : la session du noyau + le message d’erreur en attente.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session::appuyer`.
//! - Une erreur ouvre la fenêtre modale ; tant qu’elle est ouverte, les touches sont ignorées.

use crate::noyau::Session;
use crate::reglages::Reglages;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub session: Session,

    /// Message affiché dans la fenêtre modale (None = pas de fenêtre).
    pub erreur: Option<String>,

    /// Taille de police de l’écran (réglages).
    pub taille_police: f32,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: &Reglages) -> Self {
        Self {
            session: Session::new(),
            erreur: None,
            taille_police: reglages.taille_police,
        }
    }

    /// Texte de l’écran.
    pub fn affichage(&self) -> &str {
        self.session.tampon()
    }

    /// Clic sur une touche de la grille.
    pub fn appuyer(&mut self, id: &str) {
        if self.erreur.is_some() {
            return;
        }
        if let Err(e) = self.session.appuyer(id) {
            tracing::info!(touche = id, erreur = %e, "touche refusée");
            self.erreur = Some(format!("Erreur : {e}"));
        }
    }

    /// Bouton OK de la fenêtre d’erreur.
    pub fn fermer_erreur(&mut self) {
        self.erreur = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erreur_puis_ok() {
        let mut app = AppCalc::default();
        for t in ["sqrt", "-", "1", "EXE"] {
            app.appuyer(t);
        }
        assert!(app.erreur.as_deref().is_some_and(|m| m.starts_with("Erreur : ")));
        assert_eq!(app.affichage(), "sqrt(-1");

        // modale ouverte : touches ignorées
        app.appuyer("CLEAR");
        assert_eq!(app.affichage(), "sqrt(-1");

        app.fermer_erreur();
        app.appuyer("CLEAR");
        assert_eq!(app.affichage(), "");
        assert!(app.erreur.is_none());
    }

    #[test]
    fn calcul_simple() {
        let mut app = AppCalc::default();
        for t in ["1", "2", "*", "3", "EXE"] {
            app.appuyer(t);
        }
        assert_eq!(app.affichage(), "36");
        assert!(app.erreur.is_none());
    }
}
