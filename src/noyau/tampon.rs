// src/noyau/tampon.rs
//
// Tampon d’expression : texte en cours de saisie.
// Aucune validation à l’ajout : les fautes ne sont détectées qu’à EXE.

use super::insertion::plus_long_suffixe;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tampon {
    texte: String,
}

impl Tampon {
    pub fn texte(&self) -> &str {
        &self.texte
    }

    #[cfg(test)]
    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    pub fn ajouter(&mut self, fragment: &str) {
        self.texte.push_str(fragment);
    }

    /// DEL “intelligent” : retire d’un coup un fragment de la table ("sin(",
    /// "arcsin(", "random()"…), sinon un seul caractère. Sans effet si vide.
    pub fn supprimer_dernier(&mut self) {
        if let Some(f) = plus_long_suffixe(&self.texte) {
            let n = self.texte.len() - f.len();
            self.texte.truncate(n);
            return;
        }
        self.texte.pop();
    }

    pub fn vider(&mut self) {
        self.texte.clear();
    }

    pub fn remplacer(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
    }
}
