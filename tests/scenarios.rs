//! End-to-end resolution scenarios.

mod support;
use support::*;

#[test]
fn test_apic_url_from_environment_rest_prompted() {
    let prompter = ScriptedPrompter::new(&["admin", "pw"]);
    let mut creds = session("apic", &[("APIC_URL", "10.0.0.1")], &[], &prompter);

    let resolved = creds.get_from(argv(&[])).unwrap();

    assert_eq!(resolved.get("url"), Some("10.0.0.1"));
    assert_eq!(
        prompter.calls(),
        [
            (Kind::Plain, "APIC login username".to_string()),
            (Kind::Secret, "APIC Password".to_string()),
        ]
    );
    assert_eq!(resolved.get("login"), Some("admin"));
    assert_eq!(resolved.get("password"), Some("pw"));
}

#[test]
fn test_mysql_flag_environment_and_prompt() {
    let prompter = ScriptedPrompter::new(&["db-pw"]);
    let mut creds = session(
        "mysql",
        &[("APIC_MYSQLLOGIN", "root"), ("APIC_MYSQLIP", "db.env")],
        &[],
        &prompter,
    );

    let resolved = creds.get_from(argv(&["--mysqlip", "db.local"])).unwrap();

    assert_eq!(resolved.get("mysqlip"), Some("db.local"));
    assert_eq!(resolved.get("mysqllogin"), Some("root"));
    assert_eq!(resolved.get("mysqlpassword"), Some("db-pw"));
    assert_eq!(prompter.kinds(), [Kind::Secret]);
}

#[test]
fn test_both_qualifiers_fully_supplied() {
    let prompter = ScriptedPrompter::new(&[]);
    let mut creds = session(
        "apic,mysql",
        &[("APIC_PASSWORD", "pw"), ("APIC_MYSQLPASSWORD", "db-pw")],
        &[("LOGIN", "admin"), ("MYSQLLOGIN", "root")],
        &prompter,
    );

    let resolved = creds
        .get_from(argv(&["-u", "https://apic", "-i", "db.local"]))
        .unwrap();

    assert_eq!(
        resolved.keys().collect::<Vec<_>>(),
        ["login", "mysqlip", "mysqllogin", "mysqlpassword", "password", "url"]
    );
    assert!(prompter.calls().is_empty());
}

#[test]
fn test_unknown_qualifier_only_resolves_nothing() {
    let prompter = ScriptedPrompter::new(&[]);
    let mut creds = session("ldap", &[("APIC_URL", "ignored")], &[], &prompter);

    let resolved = creds.get_from(argv(&[])).unwrap();

    assert!(resolved.is_empty());
    assert!(prompter.calls().is_empty());
}
