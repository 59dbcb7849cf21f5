use super::UsersService;
use crate::{dto::output, error::Error, repository::UsersRepository, sorter};
use axum::async_trait;
use std::sync::Arc;

pub struct UsersServiceImpl {
    repository: Arc<dyn UsersRepository>,
}

impl UsersServiceImpl {
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersService for UsersServiceImpl {
    async fn find_recipients(&self) -> Result<Vec<output::User>, Error> {
        tracing::info!("finding recipients");

        let users = self.repository.find_all().await?;
        tracing::info!(count = users.len(), "found users");

        let mut recipients = users
            .into_iter()
            .filter_map(|user| {
                user.phone_number.map(|phone_number| output::User {
                    id: user.id,
                    phone_number,
                })
            })
            .collect::<Vec<_>>();
        recipients.sort_by(|a, b| sorter::string(&a.phone_number, &b.phone_number));

        Ok(recipients)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{MockUsersRepository, User};

    #[tokio::test]
    async fn find_recipients_users_without_phone_number_left_out() {
        let mut repository = MockUsersRepository::new();
        repository.expect_find_all().return_once(|| {
            Ok(vec![
                User {
                    id: "a".to_string(),
                    phone_number: Some("+48100000001".to_string()),
                },
                User {
                    id: "b".to_string(),
                    phone_number: None,
                },
            ])
        });
        let service = UsersServiceImpl::new(Arc::new(repository));

        let recipients = service.find_recipients().await.unwrap();

        assert_eq!(recipients.len(), 1);
        assert_eq!(recipients[0].id, "a");
    }

    #[tokio::test]
    async fn find_recipients_ordered_by_phone_number() {
        let mut repository = MockUsersRepository::new();
        repository.expect_find_all().return_once(|| {
            Ok(vec![
                User {
                    id: "a".to_string(),
                    phone_number: Some("+48100000002".to_string()),
                },
                User {
                    id: "b".to_string(),
                    phone_number: Some("+48100000001".to_string()),
                },
            ])
        });
        let service = UsersServiceImpl::new(Arc::new(repository));

        let recipients = service.find_recipients().await.unwrap();

        assert_eq!(recipients[0].phone_number, "+48100000001");
        assert_eq!(recipients[1].phone_number, "+48100000002");
    }
}
