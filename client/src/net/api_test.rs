use super::*;

#[test]
fn from_status_maps_auth_failures_to_unauthorized() {
    assert_eq!(BackendError::from_status(401, None), BackendError::Unauthorized);
    assert_eq!(BackendError::from_status(403, Some("nope".to_owned())), BackendError::Unauthorized);
}

#[test]
fn from_status_maps_conflict_with_service_message() {
    assert_eq!(
        BackendError::from_status(409, Some("email taken".to_owned())),
        BackendError::Conflict("email taken".to_owned())
    );
    assert!(matches!(BackendError::from_status(409, None), BackendError::Conflict(msg) if !msg.is_empty()));
}

#[test]
fn from_status_falls_back_to_status_message() {
    assert_eq!(
        BackendError::from_status(422, None),
        BackendError::Rejected { status: 422, message: "request failed: 422".to_owned() }
    );
}

#[test]
fn is_transient_only_for_transport_and_server_errors() {
    assert!(BackendError::Transport("offline".to_owned()).is_transient());
    assert!(BackendError::from_status(503, None).is_transient());
    assert!(!BackendError::from_status(400, None).is_transient());
    assert!(!BackendError::Unauthorized.is_transient());
    assert!(!BackendError::Conflict("dup".to_owned()).is_transient());
}

#[test]
fn endpoint_joins_base_without_double_slash() {
    let backend = HttpAuthBackend::new("https://auth.example.test/v1/");
    assert_eq!(backend.endpoint("login"), "https://auth.example.test/v1/login");
}

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn verify_is_unavailable_outside_browser() {
    let backend = HttpAuthBackend::default();
    let result = futures::executor::block_on(backend.verify("tok"));
    assert!(matches!(result, Err(BackendError::Transport(_))));
}
