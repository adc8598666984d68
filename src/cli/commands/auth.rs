//! Account and session commands: register, login, logout, whoami.
//!
//! These handlers are the session facade's outer edge: they trim input
//! and lowercase the email before calling into the credential store,
//! the way the original form handlers did.

use crate::auth::CredentialStore;
use crate::cli::RegisterArgs;
use crate::error::Result;
use crate::model::NewAccount;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

#[derive(Serialize)]
struct SessionOutput<'a> {
    session: Option<&'a crate::model::Profile>,
}

/// Execute the register command.
///
/// # Errors
///
/// Propagates the credential store's validation errors.
pub fn execute_register(args: &RegisterArgs, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let password = match &args.password {
        Some(p) => p.clone(),
        None => prompt_password()?,
    };

    let mut store = super::open_store(db_path)?;
    let mut auth = CredentialStore::new(&mut store);

    let profile = auth.register(&NewAccount {
        name: args.name.trim().to_string(),
        email: args.email.trim().to_lowercase(),
        phone: args.phone.trim().to_string(),
        password,
    })?;

    if json {
        println!("{}", serde_json::to_string(&profile)?);
    } else {
        println!("Registered {} <{}>", profile.name, profile.email);
        println!("  Log in with: ct login {}", profile.email);
    }

    Ok(())
}

/// Execute the login command.
///
/// # Errors
///
/// `AuthFailure` on a credential mismatch.
pub fn execute_login(
    email: &str,
    password: Option<&str>,
    db_path: Option<&PathBuf>,
    json: bool,
) -> Result<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => prompt_password()?,
    };

    let mut store = super::open_store(db_path)?;
    let mut auth = CredentialStore::new(&mut store);
    let profile = auth.login(&email.trim().to_lowercase(), &password)?;

    if json {
        println!("{}", serde_json::to_string(&profile)?);
    } else {
        println!("Logged in as {} ({})", profile.name, profile.email);
    }

    Ok(())
}

/// Execute the logout command. Idempotent.
///
/// # Errors
///
/// Returns an error only if the store access fails.
pub fn execute_logout(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = super::open_store(db_path)?;
    CredentialStore::new(&mut store).logout()?;

    if json {
        println!("{}", serde_json::to_string(&SessionOutput { session: None })?);
    } else {
        println!("Logged out");
    }

    Ok(())
}

/// Execute the whoami command.
///
/// # Errors
///
/// Returns an error only if the store access fails.
pub fn execute_whoami(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let mut store = super::open_store(db_path)?;
    let session = CredentialStore::new(&mut store).current_session()?;

    if json {
        let output = SessionOutput {
            session: session.as_ref(),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    match session {
        Some(profile) => {
            println!("{} <{}>", profile.name, profile.email);
            if let Some(last) = profile.last_login_at {
                println!("  Last login: {}", last.format("%Y-%m-%d %H:%M UTC"));
            }
        }
        None => println!("Not logged in"),
    }

    Ok(())
}

/// Read a password from stdin with a stderr prompt.
///
/// Plain line read; this tool stores a fingerprint, not a secret worth
/// terminal-mode gymnastics.
fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
