//! Random marker colors and labels.
//!
//! Both draw from an injected generator so callers can seed them.

use rand::Rng;

use crate::constants::{COLOR_ALPHABET, COLOR_DIGITS, GREETINGS};

/// Build `#` plus six symbols drawn uniformly, with replacement, from
/// [`COLOR_ALPHABET`].
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(COLOR_DIGITS + 1);
    color.push('#');
    for _ in 0..COLOR_DIGITS {
        let idx = rng.random_range(0..COLOR_ALPHABET.len());
        color.push(COLOR_ALPHABET[idx] as char);
    }
    color
}

/// Pick one greeting uniformly at random.
pub fn random_label<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    GREETINGS[rng.random_range(0..GREETINGS.len())]
}

/// Whether `color` is a marker color this module could have produced.
#[cfg(test)]
pub fn is_marker_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    digits.len() == COLOR_DIGITS && digits.bytes().all(|b| COLOR_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_colors_stay_inside_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let color = random_color(&mut rng);
            assert_eq!(color.len(), 7);
            assert!(is_marker_color(&color), "unexpected color {color}");
            assert!(!color[1..].contains(['7', '8', '9']));
        }
    }

    #[test]
    fn test_labels_come_from_greetings() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let label = random_label(&mut rng);
            assert!(GREETINGS.contains(&label));
            seen.insert(label);
        }
        assert_eq!(seen.len(), GREETINGS.len());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(random_color(&mut a), random_color(&mut b));
            assert_eq!(random_label(&mut a), random_label(&mut b));
        }
    }

    #[test]
    fn test_is_marker_color_rejects_foreign_values() {
        assert!(is_marker_color("#0123AB"));
        assert!(!is_marker_color("0123AB"));
        assert!(!is_marker_color("#0123A"));
        assert!(!is_marker_color("#0123A9"));
        assert!(!is_marker_color("#0123ab"));
    }
}
