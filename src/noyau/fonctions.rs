//! Noyau — bibliothèque de fonctions
//!
//! Fonctions numériques pures : une entrée réelle (ou complexe pour
//! toPolar), un résultat `Valeur` fini, ou une `ErreurDomaine`.
//! La vérification du nombre / type des arguments est faite par noms.rs.
//!
//! Combinatoire (factorial, nPr, nCr) : calcul exact en BigInt puis
//! conversion f64 ; au-delà de f64 => Depassement.

use num_bigint::BigInt;
use num_complex::Complex64;
use num_traits::{FromPrimitive, One, ToPrimitive};

use super::erreur::ErreurDomaine;
use super::valeur::{complexe_fini, puissance_reelle, reel_fini, Valeur};

/// 170! ≈ 7.26e306 ; 171! ne tient plus dans un f64.
const FACTORIELLE_MAX: f64 = 170.0;

/// Un BigInt de plus de 1024 bits dépasse f64::MAX.
const BITS_MAX_F64: u64 = 1024;

/* ------------------------ Fonctions réelles simples ------------------------ */

/// Fonction réelle sans restriction de domaine : seul le résultat est contrôlé.
macro_rules! reelle_simple {
    ($nom:ident, $f:ident, $label:literal) => {
        pub fn $nom(x: f64) -> Result<Valeur, ErreurDomaine> {
            reel_fini(x.$f(), $label)
        }
    };
}

reelle_simple!(sin, sin, "sin");
reelle_simple!(cos, cos, "cos");
reelle_simple!(tan, tan, "tan");
reelle_simple!(arctan, atan, "arctan");
reelle_simple!(e_pow, exp, "e_pow");

pub fn arcsin(x: f64) -> Result<Valeur, ErreurDomaine> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurDomaine::hors_domaine("arcsin", x));
    }
    reel_fini(x.asin(), "arcsin")
}

pub fn arccos(x: f64) -> Result<Valeur, ErreurDomaine> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(ErreurDomaine::hors_domaine("arccos", x));
    }
    reel_fini(x.acos(), "arccos")
}

/// 1/den, avec refus du zéro exact (csc(0), cot(0), recip(0)…).
fn inverse(den: f64, label: &'static str) -> Result<Valeur, ErreurDomaine> {
    if den == 0.0 {
        return Err(ErreurDomaine::DivisionParZero);
    }
    reel_fini(1.0 / den, label)
}

pub fn recip(x: f64) -> Result<Valeur, ErreurDomaine> {
    inverse(x, "recip")
}

pub fn csc(x: f64) -> Result<Valeur, ErreurDomaine> {
    inverse(x.sin(), "csc")
}

pub fn sec(x: f64) -> Result<Valeur, ErreurDomaine> {
    inverse(x.cos(), "sec")
}

pub fn cot(x: f64) -> Result<Valeur, ErreurDomaine> {
    inverse(x.tan(), "cot")
}

pub fn log(x: f64) -> Result<Valeur, ErreurDomaine> {
    if x <= 0.0 {
        return Err(ErreurDomaine::hors_domaine("log", x));
    }
    reel_fini(x.log10(), "log")
}

pub fn ln(x: f64) -> Result<Valeur, ErreurDomaine> {
    if x <= 0.0 {
        return Err(ErreurDomaine::hors_domaine("ln", x));
    }
    reel_fini(x.ln(), "ln")
}

/// Racine carrée RÉELLE : pas de promotion implicite en complexe.
pub fn sqrt(x: f64) -> Result<Valeur, ErreurDomaine> {
    if x < 0.0 {
        return Err(ErreurDomaine::hors_domaine("sqrt", x));
    }
    reel_fini(x.sqrt(), "sqrt")
}

/* ------------------------ Puissances / racines ------------------------ */

pub fn square(x: f64) -> Result<Valeur, ErreurDomaine> {
    reel_fini(x * x, "square")
}

pub fn cube(x: f64) -> Result<Valeur, ErreurDomaine> {
    reel_fini(x * x * x, "cube")
}

pub fn cuberoot(x: f64) -> Result<Valeur, ErreurDomaine> {
    puissance_reelle(x, 1.0 / 3.0)
}

pub fn ten_pow(x: f64) -> Result<Valeur, ErreurDomaine> {
    puissance_reelle(10.0, x)
}

pub fn power(x: f64, y: f64) -> Result<Valeur, ErreurDomaine> {
    puissance_reelle(x, y)
}

/// Racine n-ième : x^(1/n).
pub fn root(x: f64, n: f64) -> Result<Valeur, ErreurDomaine> {
    if n == 0.0 {
        return Err(ErreurDomaine::DivisionParZero);
    }
    puissance_reelle(x, 1.0 / n)
}

/* ------------------------ Combinatoire ------------------------ */

/// Entier naturel exact (refuse négatif / non entier).
fn entier_naturel(x: f64, fonction: &'static str) -> Result<BigInt, ErreurDomaine> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurDomaine::hors_domaine(fonction, x));
    }
    BigInt::from_f64(x).ok_or_else(|| ErreurDomaine::hors_domaine(fonction, x))
}

fn bigint_vers_valeur(n: &BigInt, fonction: &'static str) -> Result<Valeur, ErreurDomaine> {
    if n.bits() > BITS_MAX_F64 {
        return Err(ErreurDomaine::Depassement(fonction));
    }
    let x = n.to_f64().ok_or(ErreurDomaine::Depassement(fonction))?;
    reel_fini(x, fonction)
}

pub fn factorial(x: f64) -> Result<Valeur, ErreurDomaine> {
    let n = entier_naturel(x, "factorial")?;
    if x > FACTORIELLE_MAX {
        return Err(ErreurDomaine::Depassement("factorial"));
    }

    let mut acc = BigInt::one();
    let mut k = BigInt::from(2);
    while k <= n {
        acc *= &k;
        k += 1;
    }
    bigint_vers_valeur(&acc, "factorial")
}

/// Valide (n, r) : entiers naturels, r <= n.
fn args_combinatoires(n: f64, r: f64, fonction: &'static str) -> Result<(BigInt, BigInt), ErreurDomaine> {
    let nn = entier_naturel(n, fonction)?;
    let rr = entier_naturel(r, fonction)?;
    if rr > nn {
        return Err(ErreurDomaine::HorsDomaine {
            fonction,
            valeur: format!("r > n ({} > {})", rr, nn),
        });
    }
    Ok((nn, rr))
}

/// nPr = n! / (n-r)!  (produit des r facteurs décroissants depuis n)
pub fn permutations(n: f64, r: f64) -> Result<Valeur, ErreurDomaine> {
    let (nn, rr) = args_combinatoires(n, r, "nPr")?;

    let mut acc = BigInt::one();
    let mut facteur = &nn - &rr + 1;
    while facteur <= nn {
        acc *= &facteur;
        // produit croissant : inutile de continuer une fois hors f64
        if acc.bits() > BITS_MAX_F64 {
            return Err(ErreurDomaine::Depassement("nPr"));
        }
        facteur += 1;
    }
    bigint_vers_valeur(&acc, "nPr")
}

/// nCr = n! / (r! (n-r)!)  (récurrence C(n-k+i, i), toujours entière)
pub fn combinations(n: f64, r: f64) -> Result<Valeur, ErreurDomaine> {
    let (nn, rr) = args_combinatoires(n, r, "nCr")?;

    let reste = &nn - &rr;
    let k = if rr < reste { rr } else { reste };
    let base = &nn - &k;

    let mut acc = BigInt::one();
    let mut i = BigInt::one();
    while i <= k {
        acc = acc * (&base + &i) / &i;
        if acc.bits() > BITS_MAX_F64 {
            return Err(ErreurDomaine::Depassement("nCr"));
        }
        i += 1;
    }
    bigint_vers_valeur(&acc, "nCr")
}

/* ------------------------ Complexes : polaire / rectangulaire ------------------------ */

/// z -> (|z|, angle en degrés). Partie imaginaire nulle => angle 0.
pub fn to_polar(z: Complex64) -> Result<Valeur, ErreurDomaine> {
    if z.im != 0.0 {
        let module = z.norm();
        let angle = z.im.atan2(z.re).to_degrees();
        if !module.is_finite() {
            return Err(ErreurDomaine::Depassement("toPolar"));
        }
        return Ok(Valeur::Couple(module, angle));
    }
    Ok(Valeur::Couple(z.re.abs(), 0.0))
}

/// (r, θ en degrés) -> r·(cos θ + i·sin θ)
pub fn to_rec(r: f64, theta_deg: f64) -> Result<Valeur, ErreurDomaine> {
    let t = theta_deg.to_radians();
    complexe_fini(Complex64::new(r * t.cos(), r * t.sin()), "toRec")
}

/* ------------------------ Aléatoire ------------------------ */

/// Uniforme dans [0, 1).
pub fn random() -> Valeur {
    Valeur::Reel(rand::random::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reel(v: Result<Valeur, ErreurDomaine>) -> f64 {
        match v {
            Ok(Valeur::Reel(x)) => x,
            autre => panic!("réel attendu, obtenu {autre:?}"),
        }
    }

    fn proche(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn puissances_de_base() {
        assert_eq!(reel(square(3.0)), 9.0);
        assert_eq!(reel(cube(-2.0)), -8.0);
        assert!(proche(reel(cuberoot(27.0)), 3.0));
        assert_eq!(reel(ten_pow(3.0)), 1000.0);
        assert!(proche(reel(e_pow(1.0)), std::f64::consts::E));
        assert!(proche(reel(root(16.0, 4.0)), 2.0));
        assert_eq!(reel(power(2.0, 10.0)), 1024.0);
        assert_eq!(reel(recip(4.0)), 0.25);
    }

    #[test]
    fn inverses_refusent_zero() {
        assert_eq!(recip(0.0), Err(ErreurDomaine::DivisionParZero));
        assert_eq!(csc(0.0), Err(ErreurDomaine::DivisionParZero));
        assert_eq!(cot(0.0), Err(ErreurDomaine::DivisionParZero));
        assert!(proche(reel(sec(0.0)), 1.0));
        assert_eq!(root(8.0, 0.0), Err(ErreurDomaine::DivisionParZero));
    }

    #[test]
    fn logarithmes_et_racine() {
        assert!(proche(reel(log(1000.0)), 3.0));
        assert!(proche(reel(ln(std::f64::consts::E)), 1.0));
        assert!(matches!(log(0.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert!(matches!(ln(-1.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert!(matches!(sqrt(-1.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert_eq!(reel(sqrt(9.0)), 3.0);
    }

    #[test]
    fn trig_inverses_domaine() {
        assert!(proche(reel(arcsin(1.0)), std::f64::consts::FRAC_PI_2));
        assert!(matches!(arccos(2.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert!(proche(reel(arctan(1.0)), std::f64::consts::FRAC_PI_4));
    }

    #[test]
    fn factorielle() {
        assert_eq!(reel(factorial(0.0)), 1.0);
        assert_eq!(reel(factorial(5.0)), 120.0);
        assert!(matches!(factorial(-1.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert!(matches!(factorial(2.5), Err(ErreurDomaine::HorsDomaine { .. })));
        assert_eq!(factorial(171.0), Err(ErreurDomaine::Depassement("factorial")));
        assert!(reel(factorial(170.0)).is_finite());
    }

    #[test]
    fn combinatoire() {
        assert_eq!(reel(permutations(5.0, 2.0)), 20.0);
        assert_eq!(reel(combinations(5.0, 2.0)), 10.0);
        assert_eq!(reel(combinations(52.0, 5.0)), 2_598_960.0);
        assert_eq!(reel(permutations(4.0, 0.0)), 1.0);
        assert_eq!(reel(combinations(4.0, 4.0)), 1.0);
    }

    #[test]
    fn combinatoire_refus() {
        assert!(matches!(permutations(2.0, 5.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert!(matches!(combinations(-5.0, 2.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert!(matches!(combinations(5.0, -2.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert!(matches!(combinations(5.5, 2.0), Err(ErreurDomaine::HorsDomaine { .. })));
        assert_eq!(permutations(5000.0, 2000.0), Err(ErreurDomaine::Depassement("nPr")));
    }

    #[test]
    fn polaire_unite_imaginaire() {
        match to_polar(Complex64::new(0.0, 1.0)) {
            Ok(Valeur::Couple(m, a)) => {
                assert!(proche(m, 1.0));
                assert!(proche(a, 90.0));
            }
            autre => panic!("couple attendu, obtenu {autre:?}"),
        }
        assert_eq!(to_polar(Complex64::new(-3.0, 0.0)), Ok(Valeur::Couple(3.0, 0.0)));
    }

    #[test]
    fn rectangulaire_degres() {
        match to_rec(1.0, 90.0) {
            Ok(Valeur::Complexe(z)) => {
                assert!(z.re.abs() < 1e-12);
                assert!(proche(z.im, 1.0));
            }
            autre => panic!("complexe attendu, obtenu {autre:?}"),
        }
    }

    #[test]
    fn aleatoire_dans_intervalle() {
        for _ in 0..100 {
            match random() {
                Valeur::Reel(x) => assert!((0.0..1.0).contains(&x)),
                autre => panic!("réel attendu, obtenu {autre:?}"),
            }
        }
    }
}
