/*
[INPUT]:  Email, password and names from flags or prompts
[OUTPUT]: Stored or cleared session token
[POS]:    CLI commands - login, register, logout, status
[UPDATE]: When the sign-in flow changes
*/

use anyhow::{Result, anyhow};
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;
use kantor_adapter::{AuthManager, Profile};

use kantor_cli::forms::{normalize_email, normalize_name, validate_password};

use super::print_success;

pub async fn login(auth: &AuthManager, email: &str, password: Option<String>) -> Result<()> {
    let email = normalize_email(email).map_err(|msg| anyhow!(msg))?;
    let password = password_or_prompt(password, false)?;
    validate_password(&password).map_err(|msg| anyhow!(msg))?;

    auth.login(&email, &password).await?;
    print_success(&format!("Signed in as {email}."));
    Ok(())
}

/// Register, then sign in with the same credentials
pub async fn register(
    auth: &AuthManager,
    email: &str,
    password: Option<String>,
    first_name: &str,
    last_name: &str,
) -> Result<()> {
    let email = normalize_email(email).map_err(|msg| anyhow!(msg))?;
    let profile = Profile {
        first_name: Some(normalize_name(first_name).map_err(|msg| anyhow!(msg))?),
        last_name: Some(normalize_name(last_name).map_err(|msg| anyhow!(msg))?),
    };
    let password = password_or_prompt(password, true)?;
    validate_password(&password).map_err(|msg| anyhow!(msg))?;

    auth.register(&email, &password, profile).await?;
    auth.login(&email, &password).await?;
    print_success(&format!("Account created. Signed in as {email}."));
    Ok(())
}

pub async fn logout(auth: &AuthManager) -> Result<()> {
    auth.logout().await?;
    print_success("Signed out.");
    Ok(())
}

pub async fn status(auth: &AuthManager) -> Result<()> {
    if auth.is_authenticated().await? {
        println!("Signed in ({}).", auth.client().base_url());
    } else {
        println!("Not signed in.");
    }
    Ok(())
}

fn password_or_prompt(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    let theme = ColorfulTheme::default();
    let mut prompt = Password::with_theme(&theme).with_prompt("Password");
    if confirm {
        prompt = prompt.with_confirmation("Repeat password", "Passwords do not match");
    }
    Ok(prompt.interact()?)
}
