use rand::{distr::Alphanumeric, Rng};

const TOKEN_LENGTH: usize = 40;

/// Generates an opaque API token.
pub fn generate_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_alphanumeric_and_distinct() {
        let first = generate_token();
        let second = generate_token();

        assert_eq!(first.len(), TOKEN_LENGTH);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }
}
