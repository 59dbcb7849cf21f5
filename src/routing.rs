use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::{
        admin_notifications_service::AdminNotificationsService, dispatch_service::DispatchService,
        users_service::UsersService,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use bson::oid::ObjectId;
use std::sync::Arc;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/users", get(get_users))
        .route(
            "/api/v1/notifications/broadcast",
            post(post_broadcast_notification),
        )
        .route("/api/v1/notifications/send", post(post_service_notification))
        .route("/api/v1/admin/notifications", get(get_admin_notifications))
        .route(
            "/api/v1/admin/notifications/read",
            put(put_all_notifications_read),
        )
        .route(
            "/api/v1/admin/notifications/:id/read",
            put(put_notification_read),
        )
}

async fn get_users(
    State(users_service): State<Arc<dyn UsersService>>,
) -> Result<Json<Vec<output::User>>, Error> {
    let users = users_service.find_recipients().await?;

    Ok(Json(users))
}

async fn post_broadcast_notification(
    State(dispatch_service): State<Arc<dyn DispatchService>>,
    Json(message): Json<input::BroadcastMessage>,
) -> Result<Json<output::DispatchReport>, Error> {
    let report = dispatch_service.dispatch_to_all(message).await?;

    Ok(Json(report))
}

async fn post_service_notification(
    State(dispatch_service): State<Arc<dyn DispatchService>>,
    Json(message): Json<input::ServiceMessage>,
) -> Result<Json<output::DispatchReport>, Error> {
    let report = dispatch_service.dispatch_to_selected(message).await?;

    Ok(Json(report))
}

async fn get_admin_notifications(
    State(admin_notifications_service): State<Arc<dyn AdminNotificationsService>>,
) -> Result<Json<output::AdminNotificationFeed>, Error> {
    let feed = admin_notifications_service.find_notifications().await?;

    Ok(Json(feed))
}

async fn put_notification_read(
    State(admin_notifications_service): State<Arc<dyn AdminNotificationsService>>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    let id = ObjectId::parse_str(&id).map_err(|_| Error::NotificationNotExist)?;

    admin_notifications_service.mark_read(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn put_all_notifications_read(
    State(admin_notifications_service): State<Arc<dyn AdminNotificationsService>>,
) -> Result<StatusCode, Error> {
    admin_notifications_service.mark_all_read().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::service::{
        admin_notifications_service::MockAdminNotificationsService,
        dispatch_service::MockDispatchService, users_service::MockUsersService,
    };
    use axum::{
        body::Body,
        http::{header, Request},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn application(
        users_service: MockUsersService,
        dispatch_service: MockDispatchService,
        admin_notifications_service: MockAdminNotificationsService,
    ) -> Router {
        routing().with_state(ApplicationState {
            users_service: Arc::new(users_service),
            dispatch_service: Arc::new(dispatch_service),
            admin_notifications_service: Arc::new(admin_notifications_service),
        })
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_users_ok() {
        let mut users_service = MockUsersService::new();
        users_service.expect_find_recipients().return_once(|| {
            Ok(vec![output::User {
                id: "66b1f7a2e4d3c2b1a0f9e8d7".to_string(),
                phone_number: "+48100000001".to_string(),
            }])
        });
        let application = application(
            users_service,
            MockDispatchService::new(),
            MockAdminNotificationsService::new(),
        );

        let response = application
            .oneshot(
                Request::builder()
                    .uri("/api/v1/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["phone_number"], "+48100000001");
    }

    #[tokio::test]
    async fn post_broadcast_notification_ok() {
        let mut dispatch_service = MockDispatchService::new();
        dispatch_service
            .expect_dispatch_to_all()
            .withf(|message| message.message == "Hi")
            .return_once(|_| {
                Ok(output::DispatchReport {
                    dispatched: vec![output::DispatchedNotification {
                        user_id: "a".to_string(),
                        notification_id: "66b1f7c8e4d3c2b1a0f9e8d8".to_string(),
                    }],
                    failed: vec![],
                })
            });
        let application = application(
            MockUsersService::new(),
            dispatch_service,
            MockAdminNotificationsService::new(),
        );

        let response = application
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/notifications/broadcast")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message":"Hi"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["dispatched"].as_array().unwrap().len(), 1);
        assert!(json["failed"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn post_broadcast_notification_blank_message_unprocessable() {
        let mut dispatch_service = MockDispatchService::new();
        dispatch_service
            .expect_dispatch_to_all()
            .return_once(|_| Err(Error::Validation("message is blank")));
        let application = application(
            MockUsersService::new(),
            dispatch_service,
            MockAdminNotificationsService::new(),
        );

        let response = application
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/notifications/broadcast")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn post_service_notification_ok() {
        let mut dispatch_service = MockDispatchService::new();
        dispatch_service
            .expect_dispatch_to_selected()
            .withf(|message| {
                message.service_type == crate::dto::ServiceType::Welfare
                    && message.user_ids == vec!["b".to_string()]
            })
            .return_once(|_| {
                Ok(output::DispatchReport {
                    dispatched: vec![output::DispatchedNotification {
                        user_id: "b".to_string(),
                        notification_id: "66b1f7c8e4d3c2b1a0f9e8d8".to_string(),
                    }],
                    failed: vec![],
                })
            });
        let application = application(
            MockUsersService::new(),
            dispatch_service,
            MockAdminNotificationsService::new(),
        );

        let response = application
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/notifications/send")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"message":"Doc ready","service_type":"welfare","user_ids":["b"]}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_admin_notifications_ok() {
        let mut admin_notifications_service = MockAdminNotificationsService::new();
        admin_notifications_service
            .expect_find_notifications()
            .return_once(|| {
                Ok(output::AdminNotificationFeed {
                    notifications: vec![],
                    unread_count: 2,
                })
            });
        let application = application(
            MockUsersService::new(),
            MockDispatchService::new(),
            admin_notifications_service,
        );

        let response = application
            .oneshot(
                Request::builder()
                    .uri("/api/v1/admin/notifications")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["unread_count"], 2);
    }

    #[tokio::test]
    async fn put_notification_read_no_content() {
        let mut admin_notifications_service = MockAdminNotificationsService::new();
        admin_notifications_service
            .expect_mark_read()
            .times(1)
            .returning(|_| Ok(()));
        let application = application(
            MockUsersService::new(),
            MockDispatchService::new(),
            admin_notifications_service,
        );

        let response = application
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/admin/notifications/66b1f7a2e4d3c2b1a0f9e8d7/read")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn put_notification_read_malformed_id_not_found() {
        let application = application(
            MockUsersService::new(),
            MockDispatchService::new(),
            MockAdminNotificationsService::new(),
        );

        let response = application
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/admin/notifications/not-an-id/read")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn put_all_notifications_read_no_content() {
        let mut admin_notifications_service = MockAdminNotificationsService::new();
        admin_notifications_service
            .expect_mark_all_read()
            .times(1)
            .returning(|| Ok(()));
        let application = application(
            MockUsersService::new(),
            MockDispatchService::new(),
            admin_notifications_service,
        );

        let response = application
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/v1/admin/notifications/read")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
