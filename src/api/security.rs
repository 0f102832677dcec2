use serde::Serialize;
use urlencoding::encode;

use crate::client::{NexusClient, decode};
use crate::error::Result;
use crate::types::{Privilege, Role, User};

/// Security management: users, roles, and privileges.
pub struct SecurityApi<'a> {
    client: &'a NexusClient,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
    /// active or disabled.
    pub status: String,
    pub roles: Vec<String>,
}

impl NewUser {
    pub fn new(
        user_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
            password: password.into(),
            status: "active".to_string(),
            roles,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub status: String,
    pub roles: Vec<String>,
}

/// Payload for role create and update.
#[derive(Debug, Clone, Serialize)]
pub struct RoleConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub privileges: Vec<String>,
    pub roles: Vec<String>,
}

impl RoleConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            privileges: Vec::new(),
            roles: Vec::new(),
        }
    }
}

impl<'a> SecurityApi<'a> {
    pub(crate) fn new(client: &'a NexusClient) -> Self {
        Self { client }
    }

    // Users

    pub fn list_users(&self, user_id: Option<&str>, source: Option<&str>) -> Result<Vec<User>> {
        let mut query = Vec::new();
        if let Some(id) = user_id.filter(|s| !s.is_empty()) {
            query.push(("userId", id.to_string()));
        }
        if let Some(src) = source.filter(|s| !s.is_empty()) {
            query.push(("source", src.to_string()));
        }
        self.client.get_json("/v1/security/users", &query)
    }

    pub fn create_user(&self, user: &NewUser) -> Result<User> {
        decode(self.client.post_json("/v1/security/users", user)?)
    }

    pub fn update_user(&self, user: &UserUpdate) -> Result<()> {
        self.client.put_json(
            &format!("/v1/security/users/{}", encode(&user.user_id)),
            user,
        )?;
        Ok(())
    }

    pub fn delete_user(&self, user_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/v1/security/users/{}", encode(user_id)))
    }

    /// The password travels as a `text/plain` body, not JSON.
    pub fn change_password(&self, user_id: &str, new_password: &str) -> Result<()> {
        self.client.put_text(
            &format!("/v1/security/users/{}/change-password", encode(user_id)),
            new_password.to_string(),
        )?;
        Ok(())
    }

    // Roles

    pub fn list_roles(&self, source: Option<&str>) -> Result<Vec<Role>> {
        let mut query = Vec::new();
        if let Some(src) = source.filter(|s| !s.is_empty()) {
            query.push(("source", src.to_string()));
        }
        self.client.get_json("/v1/security/roles", &query)
    }

    pub fn get_role(&self, role_id: &str, source: &str) -> Result<Role> {
        self.client.get_json(
            &format!("/v1/security/roles/{}/{}", encode(source), encode(role_id)),
            &[],
        )
    }

    pub fn create_role(&self, role: &RoleConfig) -> Result<Role> {
        decode(self.client.post_json("/v1/security/roles", role)?)
    }

    pub fn update_role(&self, role: &RoleConfig, source: &str) -> Result<()> {
        self.client.put_json(
            &format!("/v1/security/roles/{}/{}", encode(source), encode(&role.id)),
            role,
        )?;
        Ok(())
    }

    pub fn delete_role(&self, role_id: &str, source: &str) -> Result<()> {
        self.client.delete(&format!(
            "/v1/security/roles/{}/{}",
            encode(source),
            encode(role_id)
        ))
    }

    // Privileges

    pub fn list_privileges(&self) -> Result<Vec<Privilege>> {
        self.client.get_json("/v1/security/privileges", &[])
    }

    pub fn get_privilege(&self, privilege_name: &str) -> Result<Privilege> {
        self.client.get_json(
            &format!("/v1/security/privileges/{}", encode(privilege_name)),
            &[],
        )
    }

    pub fn delete_privilege(&self, privilege_name: &str) -> Result<()> {
        self.client.delete(&format!(
            "/v1/security/privileges/{}",
            encode(privilege_name)
        ))
    }
}
