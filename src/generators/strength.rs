use crate::models::{CharClass, PasswordStrength, MIN_PASSWORD_LENGTH};

/// Scores a password from 0 to 100 by length, character variety and a
/// coarse entropy estimate, and explains what is missing.
pub fn evaluate_password_strength(password: &str) -> PasswordStrength {
    let length = password.chars().count();

    let has_lower = CharClass::Lowercase.present_in(password);
    let has_upper = CharClass::Uppercase.present_in(password);
    let has_numbers = CharClass::Numbers.present_in(password);
    let has_symbols = CharClass::Symbols.present_in(password);

    let mut score = match length {
        12.. => 40,
        8..=11 => 25,
        6..=7 => 15,
        _ => 5,
    };

    score += [has_lower, has_upper, has_numbers, has_symbols]
        .iter()
        .filter(|present| **present)
        .count() as i32
        * 10;

    score += match calculate_entropy(password) {
        60.. => 20,
        40..=59 => 15,
        30..=39 => 10,
        _ => 5,
    };

    let is_strong = score >= 80
        && length >= MIN_PASSWORD_LENGTH
        && has_lower
        && has_upper
        && has_numbers
        && has_symbols;

    let feedback = if is_strong {
        "Heslo je silné!".to_string()
    } else {
        let mut recommendations = Vec::new();
        if length < MIN_PASSWORD_LENGTH {
            recommendations.push("Použite aspoň 8 znakov.");
        }
        if !has_lower {
            recommendations.push("Pridajte malé písmená.");
        }
        if !has_upper {
            recommendations.push("Pridajte veľké písmená.");
        }
        if !has_numbers {
            recommendations.push("Pridajte čísla.");
        }
        if !has_symbols {
            recommendations.push("Pridajte špeciálne znaky.");
        }

        if recommendations.is_empty() {
            String::new()
        } else {
            format!("Odporúčania: {}", recommendations.join(" "))
        }
    };

    PasswordStrength { is_strong, score, feedback }
}

/// Bits of entropy approximated from the size of the character pool in use.
pub fn calculate_entropy(password: &str) -> u32 {
    let charset_size: usize = CharClass::ALL
        .iter()
        .filter(|class| class.present_in(password))
        .map(|class| class.charset().len())
        .sum();

    let bits_per_char = match charset_size {
        0 => 0.0,
        95.. => 6.6,
        62..=94 => 5.9,
        36..=61 => 5.2,
        26..=35 => 4.7,
        _ => 3.3,
    };

    (bits_per_char * password.chars().count() as f64) as u32
}
