//! User and role management: list, create, update, change password,
//! inspect, clean up.

use quartermaster::api::{NewUser, RoleConfig, UserUpdate};
use quartermaster::{ClientConfig, Error, NexusClient};

fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env()?;
    let client = NexusClient::new(&config)?;
    let security = client.security();

    println!("{}", "=".repeat(60));
    println!("User & Role Management Examples");
    println!("{}", "=".repeat(60));

    println!("\n1. Listing existing users...");
    match security.list_users(None, None) {
        Ok(users) => {
            println!("   Found {} users", users.len());
            for user in users.iter().take(5) {
                println!("   - {}: {} {}", user.user_id, user.first_name, user.last_name);
                println!("     Email: {}", user.email_address);
                println!("     Status: {}", user.status);
                println!("     Roles: {}", user.roles.join(", "));
                println!();
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n2. Listing roles...");
    match security.list_roles(None) {
        Ok(roles) => {
            println!("   Found {} roles", roles.len());
            for role in roles.iter().take(10) {
                println!("   - {}: {}", role.id, role.name);
                if let Some(description) = role.description.as_deref().filter(|d| !d.is_empty()) {
                    println!("     {description}");
                }
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    let role_id = "demo-developer";
    println!("\n3. Creating a new role...");
    let mut role = RoleConfig::new(role_id, "Demo Developer");
    role.description = "Developer role for demonstration".to_string();
    role.privileges = vec![
        "nx-repository-view-*-*-browse".to_string(),
        "nx-repository-view-*-*-read".to_string(),
    ];
    match security.create_role(&role) {
        Ok(created) => println!("   ✓ Created role '{}'", created.id),
        Err(Error::BadRequest { .. }) => {
            println!("   ℹ Role already exists or invalid configuration");
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    let user_id = "demo-user";
    println!("\n4. Creating a new user...");
    let new_user = NewUser::new(
        user_id,
        "Demo",
        "User",
        "demo@example.com",
        "SecurePassword123!",
        vec![role_id.to_string()],
    );
    match security.create_user(&new_user) {
        Ok(user) => {
            println!("   ✓ Created user '{user_id}'");
            println!("   User ID: {}", user.user_id);
            println!("   Email: {}", user.email_address);
        }
        Err(Error::BadRequest { .. }) => {
            println!("   ℹ User already exists or invalid configuration");
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n5. Updating user...");
    let update = UserUpdate {
        user_id: user_id.to_string(),
        first_name: "Demo".to_string(),
        last_name: "User Updated".to_string(),
        email_address: "demo-updated@example.com".to_string(),
        status: "active".to_string(),
        roles: vec![role_id.to_string(), "nx-admin".to_string()],
    };
    match security.update_user(&update) {
        Ok(()) => println!("   ✓ Updated user '{user_id}'"),
        Err(Error::NotFound { .. }) => println!("   ℹ User '{user_id}' not found"),
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n6. Changing user password...");
    match security.change_password(user_id, "NewSecurePassword456!") {
        Ok(()) => println!("   ✓ Changed password for user '{user_id}'"),
        Err(Error::NotFound { .. }) => println!("   ℹ User '{user_id}' not found"),
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n7. Listing privileges (first 10)...");
    match security.list_privileges() {
        Ok(privileges) => {
            println!("   Found {} privileges", privileges.len());
            for privilege in privileges.iter().take(10) {
                println!("   - {}: {}", privilege.name, privilege.kind);
            }
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n8. Getting role details...");
    match security.get_role(role_id, "default") {
        Ok(role) => {
            println!("   Role: {}", role.name);
            println!(
                "   Description: {}",
                role.description.as_deref().unwrap_or("N/A")
            );
            println!("   Privileges: {}", role.privileges.join(", "));
            println!("   Contained Roles: {}", role.roles.join(", "));
        }
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n9. Cleaning up demo user and role...");
    match security.delete_user(user_id) {
        Ok(()) => println!("   ✓ Deleted user '{user_id}'"),
        Err(Error::NotFound { .. }) => println!("   ℹ User '{user_id}' not found"),
        Err(e) => println!("   ✗ Error: {e}"),
    }
    match security.delete_role(role_id, "default") {
        Ok(()) => println!("   ✓ Deleted role '{role_id}'"),
        Err(Error::NotFound { .. }) => println!("   ℹ Role '{role_id}' not found"),
        Err(e) => println!("   ✗ Error: {e}"),
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}
