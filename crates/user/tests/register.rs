use akkor_shared::user::Role;
use akkor_user::{LoginInput, RegisterInput};
use temp_dir::TempDir;

mod helpers;

fn input(pseudo: &str, email: &str, password: &str) -> RegisterInput {
    RegisterInput {
        pseudo: pseudo.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn validate_unique_emails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = akkor_user::Command::new(state);

    cmd.register(input("john", "john.doe@akkor.localhost", "my_password"))
        .await?;
    let user_2 = cmd
        .register(input("johnny", "John.Doe@akkor.localhost", "my_password_v2"))
        .await;

    assert_eq!(user_2.unwrap_err().to_string(), "Email already taken");

    Ok(())
}

#[tokio::test]
async fn register_normalizes_and_defaults_to_user_role() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = akkor_user::Command::new(state.clone());
    let query = akkor_user::Query::new(state);

    let id = cmd
        .register(input("  alice  ", " Alice@Akkor.Localhost ", "my_password"))
        .await?;

    let user = query.find(id).await?.expect("user exists");
    assert_eq!(user.pseudo, "alice");
    assert_eq!(user.email, "alice@akkor.localhost");
    assert_eq!(user.role(), Role::User);

    Ok(())
}

#[tokio::test]
async fn register_rejects_invalid_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = akkor_user::Command::new(state);

    let short_pseudo = cmd
        .register(input("  ab  ", "ab@akkor.localhost", "my_password"))
        .await
        .unwrap_err();
    assert!(short_pseudo.is_input());
    assert!(short_pseudo.to_string().contains("Pseudo"));

    let bad_email = cmd
        .register(input("alice", "not-an-email", "my_password"))
        .await
        .unwrap_err();
    assert!(bad_email.to_string().contains("valid email"));

    let short_password = cmd
        .register(input("alice", "alice@akkor.localhost", "short"))
        .await
        .unwrap_err();
    assert!(short_password.to_string().contains("Password"));

    Ok(())
}

#[tokio::test]
async fn verify_credentials() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = akkor_user::Command::new(state);

    let id = cmd
        .register(input("john", "john@akkor.localhost", "my_password"))
        .await?;

    let user = cmd
        .verify_credentials(LoginInput {
            email: "JOHN@akkor.localhost".to_owned(),
            password: "my_password".to_owned(),
        })
        .await?;
    assert_eq!(user.id, id);

    let wrong_password = cmd
        .verify_credentials(LoginInput {
            email: "john@akkor.localhost".to_owned(),
            password: "other_password".to_owned(),
        })
        .await;
    assert_eq!(
        wrong_password.unwrap_err().to_string(),
        "Invalid email or password"
    );

    let unknown = cmd
        .verify_credentials(LoginInput {
            email: "ghost@akkor.localhost".to_owned(),
            password: "my_password".to_owned(),
        })
        .await;
    assert_eq!(
        unknown.unwrap_err().to_string(),
        "Invalid email or password"
    );

    Ok(())
}

#[tokio::test]
async fn set_role_promotes_existing_account() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = akkor_user::Command::new(state.clone());
    let query = akkor_user::Query::new(state);

    let id = cmd
        .register(input("john", "john@akkor.localhost", "my_password"))
        .await?;
    cmd.set_role("John@akkor.localhost", Role::Employee).await?;

    assert_eq!(query.find(id).await?.unwrap().role(), Role::Employee);

    let missing = cmd.set_role("ghost@akkor.localhost", Role::Admin).await;
    assert!(matches!(missing, Err(akkor_shared::Error::NotFound(_))));

    Ok(())
}
