use anyhow::{Result, bail};

use crate::gravatar::gravatar_url;

/// Print the avatar URL for `email`
pub fn gravatar(email: &str, size: u32) -> Result<()> {
    if email.trim().is_empty() {
        bail!("E-mail address must not be empty");
    }
    println!("{}", gravatar_url(email, size));
    Ok(())
}
