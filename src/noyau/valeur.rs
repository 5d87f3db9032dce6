// src/noyau/valeur.rs
//
// Valeur numérique du noyau : réel, complexe, ou couple (forme polaire).
//
// Forme texte canonique (affichée dans le tampon, réinjectée par ANS) :
// - réel entier  : "26", "-3"
// - réel         : "3.5", "0.1" ; exposant si |x| ≥ 1e16 ou |x| < 1e-4 : "1e300"
// - complexe     : "1j", "(-2.5j)", "(3+4j)", "(1-2.5j)"
// - couple       : "(1, 90)"
// Invariant : toute forme canonique se relit (jetons.rs) vers la même valeur.

use std::fmt;

use num_complex::Complex64;
use num_traits::Zero;

use super::erreur::{ErreurDomaine, ErreurEvaluation};

/// Au-delà : affichage en notation exposant (évite 300 chiffres dans l’écran).
const SEUIL_EXPOSANT_HAUT: f64 = 1e16;
const SEUIL_EXPOSANT_BAS: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Valeur {
    Reel(f64),
    Complexe(Complex64),
    /// (module, angle en degrés) : sortie de toPolar, littéral "(a, b)".
    Couple(f64, f64),
}

/* ------------------------ Texte ------------------------ */

/// Format canonique d’un réel fini.
pub fn format_reel(x: f64) -> String {
    if x == 0.0 {
        // -0.0 compris
        return "0".to_string();
    }
    let a = x.abs();
    if !(SEUIL_EXPOSANT_BAS..SEUIL_EXPOSANT_HAUT).contains(&a) {
        format!("{x:e}")
    } else if x.fract() == 0.0 {
        format!("{x:.0}")
    } else {
        format!("{x}")
    }
}

fn format_complexe(z: Complex64) -> String {
    if z.re == 0.0 {
        // négatif entre parenthèses : "ANS^2" doit élever (-2.5j), pas 2.5j
        if z.im.is_sign_negative() && z.im != 0.0 {
            return format!("(-{}j)", format_reel(-z.im));
        }
        return format!("{}j", format_reel(z.im));
    }
    let re = format_reel(z.re);
    if z.im.is_sign_negative() && z.im != 0.0 {
        format!("({re}-{}j)", format_reel(-z.im))
    } else {
        format!("({re}+{}j)", format_reel(z.im))
    }
}

impl fmt::Display for Valeur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Valeur::Reel(x) => f.write_str(&format_reel(*x)),
            Valeur::Complexe(z) => f.write_str(&format_complexe(*z)),
            Valeur::Couple(a, b) => write!(f, "({}, {})", format_reel(*a), format_reel(*b)),
        }
    }
}

/* ------------------------ Garde-fous “fini” ------------------------ */

/// Refuse inf/NaN : un résultat non fini n’est jamais stocké ni affiché.
pub(crate) fn reel_fini(x: f64, op: &'static str) -> Result<Valeur, ErreurDomaine> {
    if x.is_finite() {
        Ok(Valeur::Reel(x))
    } else {
        Err(ErreurDomaine::Depassement(op))
    }
}

pub(crate) fn complexe_fini(z: Complex64, op: &'static str) -> Result<Valeur, ErreurDomaine> {
    if z.re.is_finite() && z.im.is_finite() {
        Ok(Valeur::Complexe(z))
    } else {
        Err(ErreurDomaine::Depassement(op))
    }
}

/* ------------------------ Arithmétique ------------------------ */

impl Valeur {
    /// Réel ou complexe promu en complexe ; None pour un couple.
    pub fn vers_complexe(&self) -> Option<Complex64> {
        match *self {
            Valeur::Reel(x) => Some(Complex64::new(x, 0.0)),
            Valeur::Complexe(z) => Some(z),
            Valeur::Couple(..) => None,
        }
    }

    /// Réel-réel => arithmétique IEEE ; dès qu’un opérande est complexe => complexe.
    fn binaire(
        self,
        rhs: Valeur,
        reel: impl Fn(f64, f64) -> Result<Valeur, ErreurDomaine>,
        complexe: impl Fn(Complex64, Complex64) -> Result<Valeur, ErreurDomaine>,
    ) -> Result<Valeur, ErreurEvaluation> {
        if let (Valeur::Reel(a), Valeur::Reel(b)) = (self, rhs) {
            return Ok(reel(a, b)?);
        }
        match (self.vers_complexe(), rhs.vers_complexe()) {
            (Some(a), Some(b)) => Ok(complexe(a, b)?),
            _ => Err(ErreurEvaluation::Type("arithmétique sur un couple")),
        }
    }

    pub fn additionner(self, rhs: Valeur) -> Result<Valeur, ErreurEvaluation> {
        self.binaire(
            rhs,
            |a, b| reel_fini(a + b, "addition"),
            |a, b| complexe_fini(a + b, "addition"),
        )
    }

    pub fn soustraire(self, rhs: Valeur) -> Result<Valeur, ErreurEvaluation> {
        self.binaire(
            rhs,
            |a, b| reel_fini(a - b, "soustraction"),
            |a, b| complexe_fini(a - b, "soustraction"),
        )
    }

    pub fn multiplier(self, rhs: Valeur) -> Result<Valeur, ErreurEvaluation> {
        self.binaire(
            rhs,
            |a, b| reel_fini(a * b, "multiplication"),
            |a, b| complexe_fini(a * b, "multiplication"),
        )
    }

    pub fn diviser(self, rhs: Valeur) -> Result<Valeur, ErreurEvaluation> {
        self.binaire(
            rhs,
            |a, b| {
                if b == 0.0 {
                    return Err(ErreurDomaine::DivisionParZero);
                }
                reel_fini(a / b, "division")
            },
            |a, b| {
                if b.is_zero() {
                    return Err(ErreurDomaine::DivisionParZero);
                }
                complexe_fini(a / b, "division")
            },
        )
    }

    pub fn puissance(self, rhs: Valeur) -> Result<Valeur, ErreurEvaluation> {
        self.binaire(rhs, puissance_reelle, puissance_complexe)
    }

    pub fn negatif(self) -> Result<Valeur, ErreurEvaluation> {
        match self {
            Valeur::Reel(x) => Ok(Valeur::Reel(-x)),
            Valeur::Complexe(z) => Ok(Valeur::Complexe(-z)),
            Valeur::Couple(..) => Err(ErreurEvaluation::Type("négation d’un couple")),
        }
    }
}

/// x^y réel ; base négative + exposant non entier => valeur principale complexe.
pub(crate) fn puissance_reelle(x: f64, y: f64) -> Result<Valeur, ErreurDomaine> {
    if x == 0.0 && y < 0.0 {
        return Err(ErreurDomaine::DivisionParZero);
    }
    if x < 0.0 && y.fract() != 0.0 {
        return complexe_fini(Complex64::new(x, 0.0).powf(y), "puissance");
    }
    reel_fini(x.powf(y), "puissance")
}

fn puissance_complexe(z: Complex64, w: Complex64) -> Result<Valeur, ErreurDomaine> {
    if z.is_zero() {
        if w.is_zero() {
            return Ok(Valeur::Complexe(Complex64::new(1.0, 0.0)));
        }
        // 0^w : défini seulement pour w réel positif
        if w.im != 0.0 || w.re < 0.0 {
            return Err(ErreurDomaine::DivisionParZero);
        }
        return Ok(Valeur::Complexe(Complex64::zero()));
    }
    complexe_fini(z.powc(w), "puissance")
}
