/// Greeting returned by the root endpoint.
pub const GREETING: &str = "Hello World! This is a dockerized NestJS application.";

pub fn hello() -> &'static str {
    GREETING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_returns_greeting() {
        assert_eq!(
            hello(),
            "Hello World! This is a dockerized NestJS application."
        );
    }

    #[test]
    fn test_hello_is_stable() {
        assert_eq!(hello(), hello());
    }
}
