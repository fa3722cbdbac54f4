//! `/users` endpoints.

use crate::error::AdminResult;
use crate::forms::{validate_new_password, validate_new_user, validate_user_update};
use crate::models::{CreateUserRequest, ResetPasswordRequest, UpdateUserRequest, User};

use super::client::ApiClient;

impl ApiClient {
    /// `GET /users`.
    pub async fn list_users(&self) -> AdminResult<Vec<User>> {
        self.get("/users").await
    }

    /// `GET /users/{id}`.
    pub async fn get_user(&self, id: i64) -> AdminResult<User> {
        self.get(&format!("/users/{}", id)).await
    }

    /// `POST /users`, after validating the form.
    pub async fn create_user(&self, request: &CreateUserRequest) -> AdminResult<User> {
        validate_new_user(request)?;
        self.post("/users", request).await
    }

    /// `PUT /users/{id}`, after validating the changed fields.
    pub async fn update_user(&self, id: i64, request: &UpdateUserRequest) -> AdminResult<User> {
        validate_user_update(request)?;
        self.put(&format!("/users/{}", id), request).await
    }

    /// `DELETE /users/{id}`.
    pub async fn delete_user(&self, id: i64) -> AdminResult<()> {
        self.delete(&format!("/users/{}", id)).await
    }

    /// `POST /users/{id}/reset-password`.
    pub async fn reset_password(&self, id: i64, new_password: &str) -> AdminResult<()> {
        validate_new_password(new_password)?;
        let request = ResetPasswordRequest {
            new_password: new_password.to_string(),
        };
        self.post::<serde_json::Value, _>(&format!("/users/{}/reset-password", id), &request)
            .await
            .map(|_| ())
    }
}
