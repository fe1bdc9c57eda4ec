use super::*;

#[test]
fn validate_login_input_trims_username() {
    let creds = validate_login_input("  admin  ", "admin").unwrap();
    assert_eq!(creds.username, "admin");
    assert_eq!(creds.password, "admin");
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("doctor", " pass phrase ").unwrap();
    assert_eq!(creds.password, " pass phrase ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    let cases = [("", "secret"), ("   ", "secret"), ("admin", "")];
    for (username, password) in cases {
        let outcome = validate_login_input(username, password);
        assert_eq!(outcome, Err(MISSING_INPUT_MESSAGE), "{username:?}");
    }
}
