use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::models::token_models::Claims;

pub const SESSION_DURATION_DAYS: i64 = 30;

pub fn generate_session_token(user_id: i32, secret: &[u8]) -> String {
    let expiration = Utc::now() + Duration::days(SESSION_DURATION_DAYS);
    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration.timestamp(),
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret)).unwrap()
}

pub fn verify_session_token(token: &str, secret: &[u8]) -> Option<Claims> {
    decode::<Claims>(token, &DecodingKey::from_secret(secret), &Validation::default())
        .ok()
        .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_carries_the_user_id() {
        let token = generate_session_token(7, b"test-secret");
        let claims = verify_session_token(&token, b"test-secret").unwrap();
        assert_eq!(claims.sub, "7");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_session_token(7, b"test-secret");
        assert!(verify_session_token(&token, b"other-secret").is_none());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_session_token("not-a-token", b"test-secret").is_none());
    }
}
