use super::ApplicationEnv;
use crate::{
    repository::{
        AdminNotificationsRepositoryImpl, UserNotificationsRepositoryImpl, UsersRepositoryImpl,
    },
    service::{
        admin_notifications_service::{AdminNotificationsService, AdminNotificationsServiceImpl},
        dispatch_service::{DispatchService, DispatchServiceImpl},
        users_service::{UsersService, UsersServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub users_service: Arc<dyn UsersService>,
    pub dispatch_service: Arc<dyn DispatchService>,
    pub admin_notifications_service: Arc<dyn AdminNotificationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = UsersRepositoryImpl::new(db.clone());
    let users_repository = Arc::new(users_repository);
    let user_notifications_repository = UserNotificationsRepositoryImpl::new(db.clone()).await?;
    let user_notifications_repository = Arc::new(user_notifications_repository);
    let admin_notifications_repository = AdminNotificationsRepositoryImpl::new(db).await?;
    let admin_notifications_repository = Arc::new(admin_notifications_repository);

    tracing::info!("creating services");
    let users_service = UsersServiceImpl::new(users_repository.clone());
    let users_service = Arc::new(users_service);

    let dispatch_service =
        DispatchServiceImpl::new(users_repository, user_notifications_repository);
    let dispatch_service = Arc::new(dispatch_service);

    let admin_notifications_service =
        AdminNotificationsServiceImpl::new(admin_notifications_repository);
    let admin_notifications_service = Arc::new(admin_notifications_service);

    Ok((
        ApplicationState {
            users_service,
            dispatch_service,
            admin_notifications_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
