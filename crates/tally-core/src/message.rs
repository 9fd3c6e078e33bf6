//! Response bodies.
//!
//! Formatting only ever sees the scalar returned by an increment; it never
//! touches a counter.

/// Body of `GET /health-check`.
pub const HEALTH_MESSAGE: &str = "Hello, world!\n";

/// Body of every visit endpoint for the post-increment `count`.
pub fn visit_message(count: u64) -> String {
    format!("Olá! Você teve {count} visitas.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_message_embeds_count() {
        assert_eq!(visit_message(1), "Olá! Você teve 1 visitas.");
        assert_eq!(visit_message(u64::MAX), format!("Olá! Você teve {} visitas.", u64::MAX));
    }

    #[test]
    fn health_message_is_fixed() {
        assert_eq!(HEALTH_MESSAGE, "Hello, world!\n");
    }
}
