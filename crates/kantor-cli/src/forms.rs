/*
[INPUT]:  Raw user input for login and registration
[OUTPUT]: Normalized values or a user-facing validation message
[POS]:    Input validation - checks before any request is sent
[UPDATE]: When sign-in form rules change
*/

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

/// Trim and lowercase an email, rejecting obviously malformed ones.
pub fn normalize_email(input: &str) -> Result<String, &'static str> {
    let email = input.trim().to_lowercase();
    if is_valid_email(&email) {
        Ok(email)
    } else {
        Err("Enter a valid email address.")
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters long.");
    }
    Ok(())
}

/// Trimmed first or last name
pub fn normalize_name(input: &str) -> Result<String, &'static str> {
    let name = input.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err("First and last name must be at least 2 characters long.");
    }
    Ok(name.to_string())
}
