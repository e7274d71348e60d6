//! Gateway-injected identity headers extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Actor identity injected by the gateway via `x-rekolo-user-id` and
/// `x-rekolo-user-role` headers.
///
/// Returns 401 if `x-rekolo-user-id` is absent or cannot be parsed as UUID.
/// The role header is an opaque reference (a role name or a store key) and
/// may be absent; handlers resolve it to a canonical role name and enforce
/// access (403) after extraction.
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub role_ref: Option<String>,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // In Rust 1.82+ precise capturing, `async fn` captures lifetimes differently,
    // causing E0195. Fix: extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-rekolo-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        let role_ref = parts
            .headers
            .get("x-rekolo-user-role")
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id, role_ref })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use http::Request;

    async fn extract_identity(headers: Vec<(&str, &str)>) -> Result<IdentityHeaders, StatusCode> {
        let mut builder = Request::builder().method("GET").uri("/test");
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        let request = builder.body(()).unwrap();
        let (mut parts, _body) = request.into_parts();
        IdentityHeaders::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn should_extract_valid_identity_headers() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![
            ("x-rekolo-user-id", &user_id.to_string()),
            ("x-rekolo-user-role", "collector"),
        ])
        .await;

        let identity = result.unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role_ref.as_deref(), Some("collector"));
    }

    #[tokio::test]
    async fn should_allow_missing_role_header() {
        let user_id = Uuid::new_v4();
        let result = extract_identity(vec![("x-rekolo-user-id", &user_id.to_string())]).await;
        let identity = result.unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role_ref, None);
    }

    #[tokio::test]
    async fn should_reject_missing_user_id() {
        let result = extract_identity(vec![("x-rekolo-user-role", "collector")]).await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_reject_invalid_uuid() {
        let result = extract_identity(vec![
            ("x-rekolo-user-id", "not-a-uuid"),
            ("x-rekolo-user-role", "collector"),
        ])
        .await;
        assert_eq!(result.unwrap_err(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_pass_opaque_role_refs_through() {
        let user_id = Uuid::new_v4();
        let role_key = Uuid::new_v4().to_string();
        let result = extract_identity(vec![
            ("x-rekolo-user-id", &user_id.to_string()),
            ("x-rekolo-user-role", &role_key),
        ])
        .await;
        assert_eq!(result.unwrap().role_ref, Some(role_key));
    }
}
