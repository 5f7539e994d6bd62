use super::*;

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn classify_status_maps_unauthorized() {
    assert_eq!(classify_status(200), Ok(()));
    assert_eq!(classify_status(204), Ok(()));
    assert_eq!(classify_status(401), Err(ApiError::Unauthorized));
    assert_eq!(classify_status(403), Err(ApiError::Status(403)));
    assert_eq!(classify_status(500), Err(ApiError::Status(500)));
}

#[test]
fn endpoint_paths_embed_ids() {
    assert_eq!(event_path("e1"), "/admin/event/e1");
    assert_eq!(update_event_path("e1"), "/admin/event/update/e1");
    assert_eq!(allocate_path("e1"), "/admin/allocate/e1");
    assert_eq!(buy_path("e1"), "/user/event/buy/e1");
}

#[test]
fn allocate_request_uses_camel_case() {
    let body = serde_json::to_value(AllocateRequest { user_id: "u9" }).unwrap();
    assert_eq!(body, serde_json::json!({ "userId": "u9" }));
}

#[test]
fn unwrap_analytics_requires_success_and_data() {
    let ok = AnalyticsEnvelope {
        success: true,
        data: Some(Analytics::default()),
    };
    assert_eq!(unwrap_analytics(ok), Ok(Analytics::default()));

    let failed = AnalyticsEnvelope {
        success: false,
        data: Some(Analytics::default()),
    };
    assert_eq!(unwrap_analytics(failed), Err(ApiError::Rejected));

    let empty = AnalyticsEnvelope { success: true, data: None };
    assert_eq!(unwrap_analytics(empty), Err(ApiError::Rejected));
}

#[test]
fn unauthorized_message_is_user_facing() {
    assert_eq!(
        ApiError::Unauthorized.to_string(),
        "your session has expired; please sign in again"
    );
}
