// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::erreur::ErreurEvaluation;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    /// Littéral imaginaire : "2j" -> Imag(2)
    Imag(f64),

    // Fonctions + constantes : la résolution se fait UNIQUEMENT contre noms.rs.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^ ou **

    LPar,
    RPar,
    Virgule,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux : 12, 3.5, .5, 1., 1e10, 2.5E-3
/// - entiers préfixés : 0x1a, 0b11010, 0o32 (réponses converties réinjectées par ANS)
/// - imaginaires : 2j, 1.5j (le "j" nu est un identifiant -> constante)
/// - opérateurs + - * / ^ et ** (puissance)
/// - parenthèses ( ) et virgule
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (sensibles à la casse : nPr, toPolar)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEvaluation> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Ponctuation + opérateurs
        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Virgule),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // '*' ou '**'
        if c == '*' {
            if chars.get(i + 1) == Some(&'*') {
                out.push(Tok::Caret);
                i += 2;
            } else {
                out.push(Tok::Star);
                i += 1;
            }
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && est_suite_ident(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(word));
            continue;
        }

        // Nombres
        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && chars.get(i + 1).is_some_and(|d| d.is_ascii_digit()));
        if debut_nombre {
            let (tok, suivant) = lire_nombre(&chars, i)?;
            out.push(tok);
            i = suivant;
            continue;
        }

        return Err(ErreurEvaluation::Caractere(c));
    }

    Ok(out)
}

fn est_suite_ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lire_chiffres(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Lit un nombre à partir de `i` ; retourne le jeton et l’indice suivant.
fn lire_nombre(chars: &[char], start: usize) -> Result<(Tok, usize), ErreurEvaluation> {
    // Entier préfixé : 0x / 0b / 0o
    if chars[start] == '0' {
        let radix = match chars.get(start + 1) {
            Some('x' | 'X') => Some(16),
            Some('b' | 'B') => Some(2),
            Some('o' | 'O') => Some(8),
            _ => None,
        };
        if let Some(radix) = radix {
            let mut i = start + 2;
            while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            let corps: String = chars[start + 2..i].iter().collect();
            let v = BigInt::parse_bytes(corps.as_bytes(), radix)
                .and_then(|n| n.to_f64())
                .filter(|x| x.is_finite())
                .ok_or(ErreurEvaluation::Nombre(texte))?;
            return Ok((Tok::Num(v), i));
        }
    }

    // Décimal : chiffres [ . chiffres ] [ (e|E) [+|-] chiffres ]
    let mut i = lire_chiffres(chars, start);
    if i < chars.len() && chars[i] == '.' {
        i = lire_chiffres(chars, i + 1);
    }
    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        // exposant seulement si des chiffres suivent (sinon "e" est un identifiant)
        let mut k = i + 1;
        if k < chars.len() && (chars[k] == '+' || chars[k] == '-') {
            k += 1;
        }
        if k < chars.len() && chars[k].is_ascii_digit() {
            i = lire_chiffres(chars, k);
        }
    }

    let texte: String = chars[start..i].iter().collect();
    let v: f64 = texte
        .parse()
        .ok()
        .filter(|x: &f64| x.is_finite())
        .ok_or_else(|| ErreurEvaluation::Nombre(texte.clone()))?;

    // Suffixe imaginaire : "2j" (mais pas "2junk")
    if i < chars.len()
        && (chars[i] == 'j' || chars[i] == 'J')
        && !chars.get(i + 1).is_some_and(|d| est_suite_ident(*d))
    {
        return Ok((Tok::Imag(v), i + 1));
    }

    Ok((Tok::Num(v), i))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(x) => format!("{x}"),
            Tok::Imag(x) => format!("{x}j"),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
