//! Remisión identifier generation.

use rand::Rng;

const PREFIX: &str = "RM-";
const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 9;

/// Generate a pseudo-random remisión identifier: `RM-` followed by 9
/// uppercase base-36 characters.
///
/// The generator gives no uniqueness guarantee; the database enforces
/// uniqueness with a constraint on `identificador`.
pub fn generar_identificador() -> String {
    let mut rng = rand::rng();

    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();

    format!("{PREFIX}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_format() {
        let id = generar_identificador();

        assert!(id.starts_with("RM-"));
        assert_eq!(id.len(), 12);
        assert!(id[3..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_identifiers_vary() {
        let a = generar_identificador();
        let b = generar_identificador();

        // 36^9 possible suffixes; two draws colliding would indicate a
        // broken generator.
        assert_ne!(a, b);
    }
}
