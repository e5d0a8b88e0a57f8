use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        name: " Ada ".to_owned(),
        email: " ada@school.org ".to_owned(),
        password: "pw".to_owned(),
        phone: " 555-0100 ".to_owned(),
        role: "driver".to_owned(),
    }
}

#[test]
fn default_role_is_admin() {
    assert_eq!(RegisterForm::default().role, "admin");
}

#[test]
fn validate_registration_trims_text_fields() {
    let reg = validate_registration(&filled()).unwrap();
    assert_eq!(reg.name, "Ada");
    assert_eq!(reg.email, "ada@school.org");
    assert_eq!(reg.phone, "555-0100");
    assert_eq!(reg.role, "driver");
    assert_eq!(reg.password, "pw");
}

#[test]
fn validate_registration_requires_core_fields() {
    let form = RegisterForm { email: "  ".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Enter name, email, and password."));
    let form = RegisterForm { password: String::new(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Enter name, email, and password."));
}

#[test]
fn validate_registration_rejects_unknown_role() {
    let form = RegisterForm { role: "superuser".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Choose a role."));
}

#[test]
fn landing_depends_on_token() {
    assert_eq!(landing_path(Some("jwt")), "/buses");
    assert_eq!(landing_path(None), "/login");
}
