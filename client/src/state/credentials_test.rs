use super::*;

// =============================================================
// validate_login
// =============================================================

#[test]
fn validate_login_trims_email_and_keeps_password() {
    let creds = validate_login("  a@b.com ", " x ").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, " x ");
}

#[test]
fn validate_login_rejects_any_empty_field() {
    let cases = [("", "x", Field::Email), ("   ", "x", Field::Email), ("a@b.com", "", Field::Password), ("", "", Field::Email)];
    for (email, password, field) in cases {
        assert_eq!(
            validate_login(email, password),
            Err(ValidationError::EmptyField(field)),
            "email={email:?} password={password:?}"
        );
    }
}

// =============================================================
// validate_signup
// =============================================================

#[test]
fn validate_signup_accepts_matching_passwords() {
    let req = validate_signup(" Alice ", "a@b.com", "pw", "pw").unwrap();
    assert_eq!(req.name, "Alice");
    assert_eq!(req.email, "a@b.com");
    assert_eq!(req.password, "pw");
}

#[test]
fn validate_signup_rejects_mismatch() {
    assert_eq!(validate_signup("Alice", "a@b.com", "x", "y"), Err(ValidationError::PasswordMismatch));
}

#[test]
fn validate_signup_reports_empty_fields_before_mismatch() {
    assert_eq!(validate_signup("", "a@b.com", "x", "y"), Err(ValidationError::EmptyField(Field::Name)));
    assert_eq!(validate_signup("Alice", " ", "x", "x"), Err(ValidationError::EmptyField(Field::Email)));
    assert_eq!(validate_signup("Alice", "a@b.com", "", "x"), Err(ValidationError::EmptyField(Field::Password)));
    assert_eq!(
        validate_signup("Alice", "a@b.com", "x", ""),
        Err(ValidationError::EmptyField(Field::ConfirmPassword))
    );
}

// =============================================================
// Messages
// =============================================================

#[test]
fn validation_messages_name_the_field() {
    assert_eq!(ValidationError::EmptyField(Field::Email).to_string(), "Email is required.");
    assert_eq!(ValidationError::PasswordMismatch.to_string(), "Passwords do not match.");
}
