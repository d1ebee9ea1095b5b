use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use store_actor::StoreEntity;

#[async_trait]
impl StoreEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = ();
    type Filter = ();
    type Context = ();
    type Error = UserError;

    fn from_create(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<(), UserError> {
        match action {}
    }
}

/// Users have no domain actions; the empty enum makes that unrepresentable.
#[derive(Debug)]
pub enum UserAction {}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_applies_only_present_fields() {
        let mut user = User::from_create(
            UserId(1),
            UserCreate {
                name: "Alicia".to_string(),
                email: "alicia@example.cl".to_string(),
            },
        )
        .unwrap();

        user.on_update(
            UserUpdate {
                name: None,
                email: Some("nueva@example.cl".to_string()),
            },
            &(),
        )
        .await
        .unwrap();

        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "nueva@example.cl");
    }
}
