//! Noyau — conversions de base (HEX / BIN / DEC / OCT)
//!
//! Source : la dernière réponse (ANS).
//! - réel          : troncature vers zéro
//! - texte         : réponse d’une conversion précédente ("0x1a", "-0b11", "26")
//! - complexe/couple/absente : refus
//!
//! Format : préfixe canonique, signe devant ("-0x1a").

use num_bigint::{BigInt, Sign};
use num_traits::FromPrimitive;

use super::erreur::ErreurConversion;
use super::session::Reponse;
use super::valeur::Valeur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base {
    Hex,
    Bin,
    Dec,
    Oct,
}

impl Base {
    fn radix(self) -> u32 {
        match self {
            Base::Hex => 16,
            Base::Bin => 2,
            Base::Dec => 10,
            Base::Oct => 8,
        }
    }

    fn prefixe(self) -> &'static str {
        match self {
            Base::Hex => "0x",
            Base::Bin => "0b",
            Base::Dec => "",
            Base::Oct => "0o",
        }
    }

    /// Identifiant de touche ("HEX"…).
    pub fn depuis_touche(id: &str) -> Option<Base> {
        match id {
            "HEX" => Some(Base::Hex),
            "BIN" => Some(Base::Bin),
            "DEC" => Some(Base::Dec),
            "OCT" => Some(Base::Oct),
            _ => None,
        }
    }
}

/// Entier porté par la réponse, si elle en représente un.
pub fn entier_de_reponse(reponse: Option<&Reponse>) -> Result<BigInt, ErreurConversion> {
    match reponse {
        None => Err(ErreurConversion::AucuneReponse),
        Some(Reponse::Valeur(Valeur::Reel(x))) => BigInt::from_f64(x.trunc())
            .ok_or_else(|| ErreurConversion::NonEntier(Valeur::Reel(*x).to_string())),
        Some(Reponse::Valeur(v)) => Err(ErreurConversion::NonEntier(v.to_string())),
        Some(Reponse::Texte(t)) => {
            lire_entier(t).ok_or_else(|| ErreurConversion::NonEntier(t.clone()))
        }
    }
}

/// Relit "26", "-26", "0x1a", "0b11010", "0o32" (insensible à la casse du préfixe).
pub fn lire_entier(texte: &str) -> Option<BigInt> {
    let t = texte.trim();
    let (negatif, t) = match t.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, t),
    };

    let (radix, corps) = match t.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => (16, &t[2..]),
        Some("0b") => (2, &t[2..]),
        Some("0o") => (8, &t[2..]),
        _ => (10, t),
    };
    if corps.is_empty() || !corps.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let n = BigInt::parse_bytes(corps.as_bytes(), radix)?;
    Some(if negatif { -n } else { n })
}

/// Écrit `n` dans `base` avec son préfixe.
pub fn formater(n: &BigInt, base: Base) -> String {
    let signe = if n.sign() == Sign::Minus { "-" } else { "" };
    let chiffres = n.magnitude().to_str_radix(base.radix());
    format!("{signe}{}{chiffres}", base.prefixe())
}

pub fn convertir(reponse: Option<&Reponse>, base: Base) -> Result<String, ErreurConversion> {
    let n = entier_de_reponse(reponse)?;
    Ok(formater(&n, base))
}
