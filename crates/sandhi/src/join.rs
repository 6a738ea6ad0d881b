//! Forward sandhi: combine two SLP1 word forms at their boundary.
//!
//! Sandhi can be ambiguous in both directions, so `join` returns every
//! candidate combination. Rule families are tried in order — visarga,
//! vowel, final-m — and plain concatenation is the fallback when no rule
//! touches the boundary.

use crate::SandhiError;

const VOWELS: &str = "aAiIuUfFxXeEoO";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Voiced word-initial sounds for visarga purposes: vowels, voiced stops,
/// nasals, and semivowels.
fn is_voiced_initial(c: char) -> bool {
    is_vowel(c) || "gGjJqQdDbBNYRnmyrlvh".contains(c)
}

/// Combine `first` and `second`, returning all candidate joined forms.
pub fn join(first: &str, second: &str) -> Result<Vec<String>, SandhiError> {
    if first.is_empty() || second.is_empty() {
        return Err(SandhiError::EmptyInput);
    }

    let mut results = Vec::new();
    apply_visarga(first, second, &mut results);
    apply_vowel(first, second, &mut results);
    apply_final_m(first, second, &mut results);

    if results.is_empty() {
        results.push(format!("{first}{second}"));
    }
    results.sort();
    results.dedup();
    Ok(results)
}

/// Vowel sandhi at the boundary: savarṇa-dīrgha, guṇa, vṛddhi, yaṇ, ayādi.
fn apply_vowel(first: &str, second: &str, results: &mut Vec<String>) {
    let Some(v1) = first.chars().last().filter(|&c| is_vowel(c)) else {
        return;
    };
    let Some(v2) = second.chars().next().filter(|&c| is_vowel(c)) else {
        return;
    };
    let stem = &first[..first.len() - v1.len_utf8()];
    let rest = &second[v2.len_utf8()..];

    // (replacement for the boundary, does the second vowel survive?)
    let (merged, keeps_v2): (&str, bool) = match (v1, v2) {
        // savarṇa-dīrgha
        ('a' | 'A', 'a' | 'A') => ("A", false),
        ('i' | 'I', 'i' | 'I') => ("I", false),
        ('u' | 'U', 'u' | 'U') => ("U", false),
        ('f' | 'F', 'f' | 'F') => ("F", false),
        // guṇa
        ('a' | 'A', 'i' | 'I') => ("e", false),
        ('a' | 'A', 'u' | 'U') => ("o", false),
        ('a' | 'A', 'f' | 'F') => ("ar", false),
        ('a' | 'A', 'x') => ("al", false),
        // vṛddhi
        ('a' | 'A', 'e' | 'E') => ("E", false),
        ('a' | 'A', 'o' | 'O') => ("O", false),
        // yaṇ: the semivowel replaces v1, v2 survives
        ('i' | 'I', _) => ("y", true),
        ('u' | 'U', _) => ("v", true),
        ('f' | 'F', _) => ("r", true),
        // pūrvarūpa: e/o absorb a, leaving an avagraha
        ('e', 'a') => ("e'", false),
        ('o', 'a') => ("o'", false),
        // ayādi
        ('e', _) => ("ay", true),
        ('E', _) => ("Ay", true),
        ('o', _) => ("av", true),
        ('O', _) => ("Av", true),
        _ => return,
    };

    if keeps_v2 {
        results.push(format!("{stem}{merged}{v2}{rest}"));
    } else {
        results.push(format!("{stem}{merged}{rest}"));
    }
}

/// Visarga sandhi: `-aH`, `-AH`, and other `-H` finals before the second
/// word's initial sound.
fn apply_visarga(first: &str, second: &str, results: &mut Vec<String>) {
    let Some(stem) = first.strip_suffix('H') else {
        return;
    };
    let Some(c2) = second.chars().next() else {
        return;
    };

    if let Some(base) = stem.strip_suffix('a') {
        if c2 == 'a' {
            // rAmaH + asti → rAmo 'sti
            results.push(format!("{base}o'{}", &second['a'.len_utf8()..]));
        } else if is_voiced_initial(c2) {
            if is_vowel(c2) {
                // aH before a non-a vowel drops the visarga.
                results.push(format!("{base}a{second}"));
            } else {
                results.push(format!("{base}o{second}"));
            }
        }
    } else if stem.ends_with('A') {
        if is_voiced_initial(c2) {
            results.push(format!("{stem}{second}"));
        }
    } else if is_voiced_initial(c2) {
        // Other vowels before a voiced sound: visarga becomes r.
        results.push(format!("{stem}r{second}"));
    }

    // Sibilant assimilation before unvoiced stops.
    let sibilant = match c2 {
        'c' | 'C' => Some('S'),
        'w' | 'W' => Some('z'),
        't' | 'T' => Some('s'),
        _ => None,
    };
    if let Some(s) = sibilant {
        results.push(format!("{stem}{s}{second}"));
    }

    // Before k/K/p/P and sibilants the visarga is retained.
    if "kKpPSzs".contains(c2) {
        results.push(format!("{first}{second}"));
    }
}

/// Final m before a consonant becomes anusvāra.
fn apply_final_m(first: &str, second: &str, results: &mut Vec<String>) {
    if let Some(stem) = first.strip_suffix('m') {
        if second.chars().next().is_some_and(|c| !is_vowel(c)) {
            results.push(format!("{stem}M{second}"));
        }
    }
}
