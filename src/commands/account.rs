use anyhow::{Result, bail};
use dialoguer::Input;
use owo_colors::OwoColorize;
use planbook_core::auth::SaltedSha256;
use planbook_core::config::GlobalConfig;
use planbook_core::storage;

pub fn register(username: Option<String>) -> Result<()> {
    let username = resolve_username(username)?;

    let mut config = GlobalConfig::load()?;
    let users_path = config.users_path();
    let mut users = storage::load_users(&users_path)?;

    let password = rpassword::prompt_password("Password: ")?;
    let confirmed = rpassword::prompt_password("Confirm password: ")?;
    if password != confirmed {
        bail!("Passwords do not match");
    }

    users.register(&username, &password, &SaltedSha256)?;
    storage::save_users(&users_path, &users)?;

    config.current_user = Some(username.clone());
    config.save()?;

    println!("{}", format!("Welcome, {username}!").green());
    Ok(())
}

pub fn login(username: Option<String>) -> Result<()> {
    let username = resolve_username(username)?;

    let mut config = GlobalConfig::load()?;
    let users = storage::load_users(&config.users_path())?;

    let password = rpassword::prompt_password("Password: ")?;
    users.login(&username, &password, &SaltedSha256)?;

    config.current_user = Some(username.clone());
    config.save()?;

    println!("{}", format!("Logged in as {username}.").green());
    Ok(())
}

pub fn logout() -> Result<()> {
    let mut config = GlobalConfig::load()?;

    if config.current_user.take().is_none() {
        println!("{}", "Not logged in.".dimmed());
        return Ok(());
    }

    config.save()?;
    println!("Logged out.");
    Ok(())
}

fn resolve_username(flag: Option<String>) -> Result<String> {
    match flag {
        Some(name) => Ok(name),
        None => Ok(Input::<String>::new()
            .with_prompt("Username")
            .interact_text()?),
    }
}
