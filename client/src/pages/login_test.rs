use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  admin@school.org ", "pw"),
        Ok(Credentials { email: "admin@school.org".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_credentials_keeps_password_whitespace() {
    let creds = validate_credentials("a@b.com", " pw ").unwrap();
    assert_eq!(creds.password, " pw ");
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter both email and password."));
}
