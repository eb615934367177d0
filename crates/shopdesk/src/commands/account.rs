//! Session command handlers: login, register, whoami.

use owo_colors::OwoColorize;
use secrecy::SecretString;

use crate::cli::{GlobalOpts, LoginArgs, RegisterArgs};
use crate::error::CliError;
use crate::output;

use super::Stores;

fn prompt_password(prompt: &str) -> Result<SecretString, CliError> {
    let password = rpassword::prompt_password(prompt)?;
    if password.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "must not be empty".into(),
        });
    }
    Ok(SecretString::from(password))
}

pub async fn login(stores: &Stores, args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let account = args
        .account
        .or_else(|| stores.account.clone())
        .ok_or_else(|| CliError::Validation {
            field: "account".into(),
            reason: "pass --account or set one in the profile".into(),
        })?;

    let password = prompt_password(&format!("Password for {account}: "))?;
    let info = stores.user.login(&account, &password).await?;

    if !global.quiet {
        if output::should_color(&global.color) {
            eprintln!("Signed in as {}", info.account.green());
        } else {
            eprintln!("Signed in as {}", info.account);
        }
    }
    Ok(())
}

pub async fn register(
    stores: &Stores,
    args: RegisterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let password = prompt_password("Password: ")?;
    let confirm = rpassword::prompt_password("Confirm password: ")?;
    if secrecy::ExposeSecret::expose_secret(&password) != confirm {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "passwords do not match".into(),
        });
    }

    let info = stores.user.register(&args.account, &password).await?;
    if !global.quiet {
        eprintln!("Account {} registered", info.account);
    }
    Ok(())
}

pub async fn whoami(stores: &Stores, global: &GlobalOpts) -> Result<(), CliError> {
    let info = stores.user.fetch().await?;
    if !info.signed_in() {
        return Err(CliError::AuthRequired);
    }

    let rendered = output::render_single(&global.output, &info, |u| u.account.clone());
    output::print_output(&rendered, global.quiet);
    Ok(())
}
