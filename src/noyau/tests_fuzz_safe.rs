//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le noyau sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * aucune touche ne panique
//!   * EXE / conversion refusés => tampon et ANS inchangés
//!   * expression arithmétique parenthésée => même valeur que le calcul f64 direct

use std::time::{Duration, Instant};

use super::erreur::ErreurEvaluation;
use super::eval::evaluer;
use super::insertion::TABLE_INSERTION;
use super::noms::noms_autorises;
use super::session::Session;
use super::valeur::Valeur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches ------------------------ */

const TOUCHES_SIMPLES: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", ",", "+", "-", "*", "/", "(", ")", "pi",
    "e", "ANS", "DELETE", "HEX", "BIN", "DEC", "OCT", "EXE", "CLEAR",
];

fn touche_au_hasard(rng: &mut Rng) -> &'static str {
    if rng.pick(4) == 0 {
        let (t, _) = TABLE_INSERTION[rng.pick(TABLE_INSERTION.len() as u32) as usize];
        t
    } else {
        rng.choisir(TOUCHES_SIMPLES)
    }
}

#[test]
fn fuzz_touches_sans_panique_ni_mutation_partielle() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0x5EED_CA1C);

    for _ in 0..300 {
        let mut s = Session::new();
        for _ in 0..40 {
            let id = touche_au_hasard(&mut rng);
            let tampon_avant = s.tampon().to_string();
            let ans_avant = s.derniere_reponse().cloned();

            if s.appuyer(id).is_err() {
                assert_eq!(s.tampon(), tampon_avant, "touche {id:?} a modifié le tampon");
                assert_eq!(
                    s.derniere_reponse().cloned(),
                    ans_avant,
                    "touche {id:?} a modifié ANS"
                );
            }
        }
        budget(t0, max);
    }
}

/* ------------------------ Référence f64 ------------------------ */

/// Génère une expression entièrement parenthésée + sa valeur calculée directement.
/// None si la référence elle-même tombe sur une division par zéro / non fini.
fn gen_expr(rng: &mut Rng, profondeur: u32) -> (String, Option<f64>) {
    if profondeur == 0 || rng.pick(3) == 0 {
        let n = rng.pick(50) as f64;
        return (format!("{n}"), Some(n));
    }

    let (a, va) = gen_expr(rng, profondeur - 1);
    let (b, vb) = gen_expr(rng, profondeur - 1);
    let op = rng.choisir(&["+", "-", "*", "/"]);

    let v = match (va, vb) {
        (Some(x), Some(y)) => match op {
            "+" => Some(x + y),
            "-" => Some(x - y),
            "*" => Some(x * y),
            _ if y == 0.0 => None,
            _ => Some(x / y),
        },
        _ => None,
    };
    (format!("({a}{op}{b})"), v.filter(|x| x.is_finite()))
}

#[test]
fn fuzz_arithmetique_identique_au_calcul_direct() {
    let t0 = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(42);

    for _ in 0..500 {
        let (expr, attendu) = gen_expr(&mut rng, 5);
        match (evaluer(&expr), attendu) {
            (Ok(Valeur::Reel(x)), Some(y)) => assert_eq!(x, y, "expr={expr}"),
            (Err(ErreurEvaluation::Domaine(_)), None) => {}
            (obtenu, attendu) => {
                panic!("expr={expr} obtenu={obtenu:?} attendu={attendu:?}")
            }
        }
        budget(t0, max);
    }
}

#[test]
fn fuzz_fonctions_unaires_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);
    let mut rng = Rng::new(7);
    let noms = noms_autorises().noms();

    for _ in 0..2000 {
        let f = rng.choisir(&noms);
        let arg = rng.choisir(&["0", "-1", "1", "0.5", "-2.5", "170", "171", "1e308", "j", "(1, 2)"]);
        let expr = format!("{f}({arg})");
        if let Ok(v) = evaluer(&expr) {
            // toute valeur acceptée est finie et se relit
            let relu = evaluer(&v.to_string());
            assert!(relu.is_ok(), "expr={expr} v={v} relu={relu:?}");
        }
        budget(t0, max);
    }
}
