use super::*;

async fn extract(state: &AppState, header: Option<&str>) -> Result<BearerIdentity, AppError> {
    let mut parts = parts_with_header(header);
    <BearerIdentity as FromRequestParts<AppState>>::from_request_parts(&mut parts, state).await
}

async fn state() -> AppState {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.unwrap();

    AppState::new(db, TokenService::new(SECRET, 1), None)
}

/// Expected: identity carrying the token's user ID
#[tokio::test]
async fn accepts_valid_bearer_token() {
    let state = state().await;
    let token = state.tokens.issue(7).unwrap();

    let identity = extract(&state, Some(&format!("Bearer {}", token)))
        .await
        .unwrap();

    assert_eq!(identity, BearerIdentity { user_id: 7 });
}

/// Expected: Err(MissingToken)
#[tokio::test]
async fn rejects_missing_header() {
    let state = state().await;

    let result = extract(&state, None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests wrong schemes, empty tokens and tokens signed with another secret.
///
/// Expected: Err(InvalidToken) for each
#[tokio::test]
async fn rejects_malformed_or_forged_tokens() {
    let state = state().await;
    let forged = TokenService::new("another-secret", 1).issue(7).unwrap();

    for header in [
        "Basic dXNlcjpwYXNz".to_string(),
        "Bearer ".to_string(),
        "Bearer not-a-jwt".to_string(),
        format!("Bearer {}", forged),
    ] {
        let result = extract(&state, Some(&header)).await;
        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::InvalidToken(_)))),
            "header {header:?} should be rejected"
        );
    }
}

/// Tests the optional extractor used by registration.
///
/// Expected: None without header, Err with an invalid one
#[tokio::test]
async fn optional_extractor_distinguishes_absent_and_invalid() {
    use axum::extract::OptionalFromRequestParts;

    let state = state().await;

    let mut parts = parts_with_header(None);
    let absent =
        <BearerIdentity as OptionalFromRequestParts<AppState>>::from_request_parts(&mut parts, &state)
            .await;
    assert!(matches!(absent, Ok(None)));

    let mut parts = parts_with_header(Some("Bearer garbage"));
    let invalid =
        <BearerIdentity as OptionalFromRequestParts<AppState>>::from_request_parts(&mut parts, &state)
            .await;
    assert!(invalid.is_err());
}
