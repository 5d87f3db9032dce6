//! Tests de propriétés (campagne) : le contrat du noyau vu depuis les touches.
//!
//! Chaque test part d’une session neuve et ne passe que par les touches
//! (`appuyer`, ou `touche(Inserer(..))` pour un texte sans touche dédiée).

use super::erreur::{ErreurCalc, ErreurDomaine, ErreurEvaluation};
use super::session::{Reponse, Session, Touche};
use super::valeur::Valeur;

fn session(touches: &[&str]) -> Session {
    let mut s = Session::new();
    for t in touches {
        s.appuyer(t).unwrap_or_else(|e| panic!("touche {t:?} : {e}"));
    }
    s
}

fn exe(s: &mut Session) -> Result<(), ErreurCalc> {
    s.appuyer("EXE")
}

fn couple(s: &Session) -> (f64, f64) {
    match s.derniere_reponse() {
        Some(Reponse::Valeur(Valeur::Couple(a, b))) => (*a, *b),
        autre => panic!("couple attendu, obtenu {autre:?}"),
    }
}

/* ------------------------ Auto-fermeture ------------------------ */

#[test]
fn prop_une_fermante_ajoutee() {
    let mut s = session(&["(", "3", "+", "4"]);
    exe(&mut s).unwrap();
    assert_eq!(s.tampon(), "7");
}

#[test]
fn prop_deux_fermantes_ajoutees() {
    let mut s = session(&["(", "(", "3", "+", "4"]);
    exe(&mut s).unwrap();
    assert_eq!(s.tampon(), "7");
}

#[test]
fn prop_fermantes_en_trop_non_retirees() {
    let mut s = session(&["3", "+", "4", ")"]);
    let r = exe(&mut s);
    assert!(matches!(
        r,
        Err(ErreurCalc::Evaluation(ErreurEvaluation::Syntaxe(_)))
    ));
    assert_eq!(s.tampon(), "3+4)");
}

/* ------------------------ DEL ------------------------ */

#[test]
fn prop_delete_retire_sin_entier() {
    let mut s = session(&["2", "*", "sin"]);
    assert_eq!(s.tampon(), "2*sin(");
    s.appuyer("DELETE").unwrap();
    assert_eq!(s.tampon(), "2*");
}

/* ------------------------ Conversion + ANS ------------------------ */

#[test]
fn prop_hex_puis_ans() {
    let mut s = session(&["2", "6", "EXE", "HEX"]);
    assert_eq!(s.tampon(), "0x1a");
    s.appuyer("CLEAR").unwrap();
    s.appuyer("ANS").unwrap();
    assert_eq!(s.tampon(), "0x1a");
}

/* ------------------------ Combinatoire ------------------------ */

#[test]
fn prop_npr_ncr() {
    let s = session(&["nPr", "5", ",", "2", "EXE"]);
    assert_eq!(s.tampon(), "20");

    let s = session(&["nCr", "5", ",", "2", "EXE"]);
    assert_eq!(s.tampon(), "10");
}

/* ------------------------ Polaire / rectangulaire ------------------------ */

#[test]
fn prop_polaire_unite_imaginaire() {
    let mut s = session(&["Pol", "i"]);
    exe(&mut s).unwrap();
    let (m, a) = couple(&s);
    assert!((m - 1.0).abs() < 1e-12);
    assert!((a - 90.0).abs() < 1e-12);
    assert_eq!(s.tampon(), "(1, 90)");

    // aller-retour via ANS : toRec((1, 90)) ≈ j
    s.appuyer("CLEAR").unwrap();
    s.appuyer("Rec").unwrap();
    s.appuyer("ANS").unwrap();
    exe(&mut s).unwrap();
    match s.derniere_reponse() {
        Some(Reponse::Valeur(Valeur::Complexe(z))) => {
            assert!(z.re.abs() < 1e-12);
            assert!((z.im - 1.0).abs() < 1e-12);
        }
        autre => panic!("complexe attendu, obtenu {autre:?}"),
    }
}

/* ------------------------ Noms interdits ------------------------ */

#[test]
fn prop_nom_hors_ensemble_refuse() {
    for expr in ["__import__(0)", "open(0)", "exit()", "globals()", "sin.__class__"] {
        let mut s = Session::new();
        s.touche(Touche::Inserer(expr)).unwrap();
        let r = exe(&mut s);
        assert!(
            matches!(r, Err(ErreurCalc::Evaluation(_))),
            "{expr:?} devrait être refusé, obtenu {r:?}"
        );
        assert_eq!(s.tampon(), expr);
        assert!(s.derniere_reponse().is_none());
    }
}

/* ------------------------ Erreurs de domaine sans effet ------------------------ */

#[test]
fn prop_domaine_factorielle_et_racine() {
    let mut s = session(&["4", "EXE", "CLEAR", "factorial", "-", "1"]);
    let r = exe(&mut s);
    assert!(matches!(
        r,
        Err(ErreurCalc::Evaluation(ErreurEvaluation::Domaine(
            ErreurDomaine::HorsDomaine { .. }
        )))
    ));
    assert_eq!(s.tampon(), "factorial(-1");
    assert_eq!(s.derniere_reponse(), Some(&Reponse::Valeur(Valeur::Reel(4.0))));

    s.appuyer("CLEAR").unwrap();
    for t in ["sqrt", "-", "1"] {
        s.appuyer(t).unwrap();
    }
    let r = exe(&mut s);
    assert!(matches!(
        r,
        Err(ErreurCalc::Evaluation(ErreurEvaluation::Domaine(
            ErreurDomaine::HorsDomaine { .. }
        )))
    ));
    assert_eq!(s.tampon(), "sqrt(-1");
    assert_eq!(s.derniere_reponse(), Some(&Reponse::Valeur(Valeur::Reel(4.0))));
}

/* ------------------------ Forme canonique relisible ------------------------ */

#[test]
fn prop_resultat_relu_identique() {
    for expr in ["1/3", "2^0.5", "3+4j", "(1-2j)*j", "1e20*3", "0.00001", "toPolar(1+j)"] {
        let mut s = Session::new();
        s.touche(Touche::Inserer(expr)).unwrap();
        exe(&mut s).unwrap();
        let premier = s.derniere_reponse().cloned();
        exe(&mut s).unwrap();
        assert_eq!(s.derniere_reponse().cloned(), premier, "expr={expr:?}");
    }
}
