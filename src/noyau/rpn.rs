// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de Valeur
//
// Règles:
// - Ident(name) suivi de '(' => appel de fonction ; l’arité est comptée (virgules)
// - Ident(name) seul        => constante
// - '(' a, b ')' sans fonction => couple (a, b)
// - Moins unaire : opérateur préfixe Neg, plus fort que * / mais plus faible que ^
//   (-2^2 = -4, 2^-1 = 0.5). Plus unaire : ignoré.
// - ^ associatif à droite.
//
// La RPN ne contient que des noms ; leur résolution passe par NomsAutorises.

use super::erreur::ErreurEvaluation;
use super::jetons::Tok;
use super::noms::NomsAutorises;
use super::valeur::Valeur;

use num_complex::Complex64;

#[derive(Clone, Debug, PartialEq)]
pub enum Rpn {
    Valeur(Valeur),
    /// Constante à résoudre.
    Nom(String),
    /// Fonction + nombre d’arguments.
    Appel(String, usize),
    /// Littéral (a, b, …) : nombre d’éléments.
    Couple(usize),
    Neg,
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

/// Élément de la pile d’opérateurs.
enum Pile {
    Op(Rpn),
    Ouvrante {
        fonction: Option<String>,
        virgules: usize,
    },
}

fn precedence(op: &Rpn) -> u8 {
    match op {
        Rpn::Plus | Rpn::Moins => 1,
        Rpn::Fois | Rpn::Divise => 2,
        Rpn::Neg => 3,
        Rpn::Puissance => 4,
        _ => 0,
    }
}

fn is_right_associative(op: &Rpn) -> bool {
    matches!(op, Rpn::Puissance)
}

fn op_binaire(t: &Tok) -> Option<Rpn> {
    match t {
        Tok::Plus => Some(Rpn::Plus),
        Tok::Minus => Some(Rpn::Moins),
        Tok::Star => Some(Rpn::Fois),
        Tok::Slash => Some(Rpn::Divise),
        Tok::Caret => Some(Rpn::Puissance),
        _ => None,
    }
}

/// Dépile vers `out` jusqu’à la prochaine ouvrante (laissée sur la pile).
fn vider_jusqu_a_ouvrante(ops: &mut Vec<Pile>, out: &mut Vec<Rpn>) {
    while let Some(Pile::Op(_)) = ops.last() {
        if let Some(Pile::Op(op)) = ops.pop() {
            out.push(op);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("nPr"), LPar, Num(5), Virgule, Num(2), RPar]
///   rpn:    [5, 2, Appel("nPr", 2)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Rpn>, ErreurEvaluation> {
    let mut out: Vec<Rpn> = Vec::new();
    let mut ops: Vec<Pile> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les opérateurs manquants.
    let mut prev_was_value = false;
    // Juste après '(' : autorise l’appel vide "random()".
    let mut prev_was_open = false;

    let mut i = 0;
    while i < tokens.len() {
        let tok = &tokens[i];
        let mut ouvre = false;

        match tok {
            Tok::Num(_) | Tok::Imag(_) | Tok::Ident(_) if prev_was_value => {
                return Err(ErreurEvaluation::Syntaxe("opérateur manquant"));
            }

            Tok::Num(x) => {
                out.push(Rpn::Valeur(Valeur::Reel(*x)));
                prev_was_value = true;
            }

            Tok::Imag(x) => {
                out.push(Rpn::Valeur(Valeur::Complexe(Complex64::new(0.0, *x))));
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if tokens.get(i + 1) == Some(&Tok::LPar) {
                    // appel : la fonction voyage avec sa parenthèse
                    ops.push(Pile::Ouvrante {
                        fonction: Some(name.clone()),
                        virgules: 0,
                    });
                    i += 1;
                    ouvre = true;
                    prev_was_value = false;
                } else {
                    out.push(Rpn::Nom(name.clone()));
                    prev_was_value = true;
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEvaluation::Syntaxe("opérateur manquant avant '('"));
                }
                ops.push(Pile::Ouvrante {
                    fonction: None,
                    virgules: 0,
                });
                ouvre = true;
            }

            Tok::Virgule => {
                if !prev_was_value {
                    return Err(ErreurEvaluation::Syntaxe("argument manquant"));
                }
                vider_jusqu_a_ouvrante(&mut ops, &mut out);
                match ops.last_mut() {
                    Some(Pile::Ouvrante { virgules, .. }) => *virgules += 1,
                    _ => return Err(ErreurEvaluation::Syntaxe("virgule hors parenthèses")),
                }
                prev_was_value = false;
            }

            Tok::RPar => {
                let vide = !prev_was_value && prev_was_open;
                if !prev_was_value && !vide {
                    return Err(ErreurEvaluation::Syntaxe("argument manquant"));
                }

                vider_jusqu_a_ouvrante(&mut ops, &mut out);
                let (fonction, virgules) = match ops.pop() {
                    Some(Pile::Ouvrante { fonction, virgules }) => (fonction, virgules),
                    _ => {
                        return Err(ErreurEvaluation::Syntaxe(
                            "parenthèse fermante sans ouvrante",
                        ))
                    }
                };
                let nb = if vide { 0 } else { virgules + 1 };

                match (fonction, nb) {
                    (Some(f), n) => out.push(Rpn::Appel(f, n)),
                    (None, 0) => return Err(ErreurEvaluation::Syntaxe("parenthèses vides")),
                    (None, 1) => {}
                    (None, n) => out.push(Rpn::Couple(n)),
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // unaire : '-' => Neg (préfixe, ne dépile rien) ; '+' => rien
                if matches!(tok, Tok::Minus) {
                    ops.push(Pile::Op(Rpn::Neg));
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    return Err(ErreurEvaluation::Syntaxe("opérande manquant"));
                }
                let op = op_binaire(tok).ok_or(ErreurEvaluation::Syntaxe("opérateur inconnu"))?;

                // dépile tant que:
                // - on n'est pas bloqué par '(' (ou un appel)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(Pile::Op(top)) = ops.last() {
                    let p_top = precedence(top);
                    let p_tok = precedence(&op);

                    let doit_pop = if is_right_associative(&op) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(Pile::Op(top)) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(Pile::Op(op));
                prev_was_value = false;
            }
        }

        prev_was_open = ouvre;
        i += 1;
    }

    if !prev_was_value {
        return Err(ErreurEvaluation::Syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::Op(op) => out.push(op),
            Pile::Ouvrante { .. } => {
                return Err(ErreurEvaluation::Syntaxe("parenthèses non fermées"))
            }
        }
    }

    Ok(out)
}

fn depiler(st: &mut Vec<Valeur>) -> Result<Valeur, ErreurEvaluation> {
    st.pop().ok_or(ErreurEvaluation::Syntaxe("expression invalide"))
}

/// Évalue une RPN. Les noms ne sont résolus QUE dans `noms`.
pub fn eval_rpn(rpn: &[Rpn], noms: &NomsAutorises) -> Result<Valeur, ErreurEvaluation> {
    let mut st: Vec<Valeur> = Vec::new();

    for item in rpn {
        match item {
            Rpn::Valeur(v) => st.push(*v),
            Rpn::Nom(name) => st.push(noms.constante(name)?),

            Rpn::Appel(name, n) => {
                if st.len() < *n {
                    return Err(ErreurEvaluation::Syntaxe("expression invalide"));
                }
                let args = st.split_off(st.len() - n);
                st.push(noms.appeler(name, &args)?);
            }

            Rpn::Couple(n) => {
                if *n != 2 {
                    return Err(ErreurEvaluation::Type("seuls les couples (a, b) sont supportés"));
                }
                let b = depiler(&mut st)?;
                let a = depiler(&mut st)?;
                match (a, b) {
                    (Valeur::Reel(a), Valeur::Reel(b)) => st.push(Valeur::Couple(a, b)),
                    _ => return Err(ErreurEvaluation::Type("un couple contient deux réels")),
                }
            }

            Rpn::Neg => {
                let a = depiler(&mut st)?;
                st.push(a.negatif()?);
            }

            Rpn::Plus | Rpn::Moins | Rpn::Fois | Rpn::Divise | Rpn::Puissance => {
                let b = depiler(&mut st)?;
                let a = depiler(&mut st)?;
                let r = match item {
                    Rpn::Plus => a.additionner(b)?,
                    Rpn::Moins => a.soustraire(b)?,
                    Rpn::Fois => a.multiplier(b)?,
                    Rpn::Divise => a.diviser(b)?,
                    _ => a.puissance(b)?,
                };
                st.push(r);
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEvaluation::Syntaxe("expression invalide"));
    }
    depiler(&mut st)
}

/// Format utilitaire (journal).
pub fn format_rpn(rpn: &[Rpn]) -> String {
    let mut out = Vec::with_capacity(rpn.len());
    for r in rpn {
        let s = match r {
            Rpn::Valeur(v) => v.to_string(),
            Rpn::Nom(n) => n.clone(),
            Rpn::Appel(n, k) => format!("{n}/{k}"),
            Rpn::Couple(k) => format!("couple/{k}"),
            Rpn::Neg => "neg".to_string(),
            Rpn::Plus => "+".to_string(),
            Rpn::Moins => "-".to_string(),
            Rpn::Fois => "*".to_string(),
            Rpn::Divise => "/".to_string(),
            Rpn::Puissance => "^".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
