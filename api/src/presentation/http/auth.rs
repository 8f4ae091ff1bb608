use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::application::errors::ServiceError;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::presentation::http::error::ApiError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Authenticated caller, placed in request extensions by [`require_user`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|auth| auth.strip_prefix("Bearer "))
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| Bearer(t.to_string()))
            .ok_or(ApiError::Unauthenticated)
    }
}

pub(crate) fn validate_bearer(cfg: &Config, bearer: Bearer) -> Result<String, ApiError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // a configured iss/aud is only checked when the claim is present unless it is required
    let mut required = vec!["exp"];
    if let Some(iss) = &cfg.jwt_issuer {
        validation.set_issuer(&[iss]);
        required.push("iss");
    }
    match &cfg.jwt_audience {
        Some(aud) => {
            validation.set_audience(&[aud]);
            required.push("aud");
        }
        None => validation.validate_aud = false,
    }
    validation.set_required_spec_claims(&required[..]);
    let data = jsonwebtoken::decode::<Claims>(
        &bearer.0,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        tracing::debug!(error = %e, "bearer_rejected");
        ApiError::Unauthenticated
    })?;
    if data.claims.sub.trim().is_empty() {
        return Err(ApiError::Unauthenticated);
    }
    Ok(data.claims.sub)
}

/// Validates the bearer token and provisions the user row on first sight.
pub async fn require_user(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = validate_bearer(&ctx.cfg, bearer)?;
    ctx.user_repo()
        .ensure_user(&user_id)
        .await
        .map_err(ServiceError::from)?;
    req.extensions_mut().insert(AuthUser(user_id));
    Ok(next.run(req).await)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};

    pub(crate) fn token_for(cfg: &Config, sub: &str) -> String {
        let exp = (chrono::Utc::now().timestamp() + 3600) as usize;
        jsonwebtoken::encode(
            &Header::default(),
            &Claims {
                sub: sub.to_string(),
                exp,
            },
            &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    fn cfg() -> Config {
        Config::from_source(|_| None).unwrap()
    }

    #[test]
    fn accepts_token_signed_with_secret() {
        let cfg = cfg();
        let sub = validate_bearer(&cfg, Bearer(token_for(&cfg, "idp|42"))).unwrap();
        assert_eq!(sub, "idp|42");
    }

    #[test]
    fn rejects_foreign_signature() {
        let cfg = cfg();
        let mut other = cfg.clone();
        other.jwt_secret = "some-other-secret-entirely".into();
        assert!(matches!(
            validate_bearer(&cfg, Bearer(token_for(&other, "idp|42"))),
            Err(ApiError::Unauthenticated)
        ));
    }

    fn token_with(cfg: &Config, claims: serde_json::Value) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
        .unwrap()
    }

    fn exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn configured_issuer_is_enforced() {
        let mut cfg = cfg();
        let token = token_for(&cfg, "idp|42");
        cfg.jwt_issuer = Some("https://id.example.com".into());
        assert!(matches!(
            validate_bearer(&cfg, Bearer(token)),
            Err(ApiError::Unauthenticated)
        ));

        let wrong = token_with(
            &cfg,
            serde_json::json!({ "sub": "idp|42", "exp": exp(), "iss": "https://evil.example.com" }),
        );
        assert!(validate_bearer(&cfg, Bearer(wrong)).is_err());

        let right = token_with(
            &cfg,
            serde_json::json!({ "sub": "idp|42", "exp": exp(), "iss": "https://id.example.com" }),
        );
        assert_eq!(validate_bearer(&cfg, Bearer(right)).unwrap(), "idp|42");
    }

    #[test]
    fn configured_audience_is_enforced() {
        let mut cfg = cfg();
        cfg.jwt_audience = Some("dmp-api".into());

        let missing = token_for(&cfg, "idp|42");
        assert!(matches!(
            validate_bearer(&cfg, Bearer(missing)),
            Err(ApiError::Unauthenticated)
        ));

        let foreign = token_with(
            &cfg,
            serde_json::json!({ "sub": "idp|42", "exp": exp(), "aud": "billing" }),
        );
        assert!(validate_bearer(&cfg, Bearer(foreign)).is_err());

        let ours = token_with(
            &cfg,
            serde_json::json!({ "sub": "idp|42", "exp": exp(), "aud": "dmp-api" }),
        );
        assert_eq!(validate_bearer(&cfg, Bearer(ours)).unwrap(), "idp|42");
    }

    #[test]
    fn issuer_and_audience_both_required_when_configured() {
        let mut cfg = cfg();
        cfg.jwt_issuer = Some("https://id.example.com".into());
        cfg.jwt_audience = Some("dmp-api".into());
        let bare = token_with(&cfg, serde_json::json!({ "sub": "idp|42", "exp": exp() }));
        assert!(validate_bearer(&cfg, Bearer(bare)).is_err());

        let iss_only = token_with(
            &cfg,
            serde_json::json!({ "sub": "idp|42", "exp": exp(), "iss": "https://id.example.com" }),
        );
        assert!(validate_bearer(&cfg, Bearer(iss_only)).is_err());
    }
}
