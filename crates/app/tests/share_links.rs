use dashboard_app::{restore, share_link};
use dashboard_core::{Credentials, DateRange};

fn inputs() -> (Credentials, DateRange) {
    (
        Credentials {
            api_key: format!("sess-{}", "a".repeat(40)),
            organization_key: "org-abc123".to_string(),
        },
        DateRange {
            start: "2024-01-01".to_string(),
            end: "2024-01-31".to_string(),
        },
    )
}

#[test]
fn link_carries_all_four_inputs() {
    let (credentials, range) = inputs();
    let link = share_link("http://127.0.0.1:3845/", &credentials, &range).expect("link");

    assert!(link.contains("apiKey=sess-"));
    assert!(link.contains("organizationKey=org-abc123"));
    assert!(link.contains("startDate=2024-01-01"));
    assert!(link.contains("endDate=2024-01-31"));

    let restored = restore(&link).expect("restore");
    assert_eq!(restored.api_key.as_deref(), Some(credentials.api_key.as_str()));
    assert_eq!(restored.organization_key.as_deref(), Some("org-abc123"));
    assert_eq!(restored.start_date.as_deref(), Some("2024-01-01"));
    assert_eq!(restored.end_date.as_deref(), Some("2024-01-31"));
}

#[test]
fn empty_fields_are_omitted() {
    let credentials = Credentials::default();
    let range = DateRange {
        start: "2024-01-01".to_string(),
        end: String::new(),
    };
    let link = share_link("http://127.0.0.1:3845/", &credentials, &range).expect("link");

    assert!(!link.contains("apiKey"));
    assert!(!link.contains("organizationKey"));
    assert!(!link.contains("endDate"));
    assert!(link.contains("startDate=2024-01-01"));

    let restored = restore(&link).expect("restore");
    assert!(restored.api_key.is_none());
    assert_eq!(restored.start_date.as_deref(), Some("2024-01-01"));
}

#[test]
fn unrelated_parameters_are_ignored_on_restore() {
    let restored =
        restore("http://127.0.0.1:3845/?theme=dark&startDate=2024-03-01").expect("restore");
    assert_eq!(restored.start_date.as_deref(), Some("2024-03-01"));
    assert!(restored.api_key.is_none());
}

#[test]
fn garbage_links_are_rejected() {
    assert!(restore("not a url").is_err());
    let (credentials, range) = inputs();
    assert!(share_link("::::", &credentials, &range).is_err());
}
