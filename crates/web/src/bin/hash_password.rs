//! Prints an argon2 PHC string suitable for `ADMIN_PASSWORD_HASH`.

use anyhow::{Context, bail};
use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};

fn main() -> anyhow::Result<()> {
    let Some(password) = std::env::args().nth(1) else {
        bail!("usage: hash_password <password>");
    };

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))
        .context("Failed to hash password")?;

    println!("{}", hash);
    Ok(())
}
