// src/noyau/insertion.rs
//
// Table d’insertion : identifiant de touche -> fragment de texte ajouté au tampon.
// Statique, immuable. Sert aussi à DEL : un fragment en fin de tampon part d’un bloc.

/// (touche, fragment). L’ordre sert à départager deux suffixes de même longueur.
pub const TABLE_INSERTION: &[(&str, &str)] = &[
    ("sin", "sin("),
    ("cos", "cos("),
    ("tan", "tan("),
    ("arcsin", "arcsin("),
    ("arccos", "arccos("),
    ("arctan", "arctan("),
    ("csc", "csc("),
    ("sec", "sec("),
    ("cot", "cot("),
    ("log", "log("),
    ("ln", "ln("),
    ("sqrt", "sqrt("),
    ("factorial", "factorial("),
    ("cube", "cube("),
    ("square", "square("),
    ("cuberoot", "cuberoot("),
    ("10^x", "ten_pow("),
    ("e^x", "e_pow("),
    ("^-1", "recip("),
    ("nPr", "nPr("),
    ("nCr", "nCr("),
    ("Pol", "toPolar("),
    ("Rec", "toRec("),
    ("root", "root("),
    ("power", "power("),
    ("random", "random()"),
    ("i", "j"),
];

/// Fragment inséré par une touche, s’il y en a un.
pub fn fragment(touche: &str) -> Option<&'static str> {
    TABLE_INSERTION
        .iter()
        .find(|(t, _)| *t == touche)
        .map(|(_, f)| *f)
}

/// Plus long fragment de la table qui termine `texte` (égalité : ordre de la table).
pub fn plus_long_suffixe(texte: &str) -> Option<&'static str> {
    let mut meilleur: Option<&'static str> = None;
    for &(_, f) in TABLE_INSERTION {
        if texte.ends_with(f) && meilleur.is_none_or(|m| f.len() > m.len()) {
            meilleur = Some(f);
        }
    }
    meilleur
}
