//! Workspace tests: load/save ordering over the stub remote.

use hedb::{
    year_template_path, College, DeptRecord, DocumentStore, Workspace, WorkspaceError,
    CONFIG_PATH, DEPT_GROUPING_PATH, DEPT_MASTER_PATH, SYSTEM_FIELDS,
};

use crate::support;

#[tokio::test]
async fn first_save_creates_only_the_config_document() {
    let (remote, config) = support::start().await;
    let mut workspace = Workspace::connect(DocumentStore::new(config)).await.unwrap();

    assert!(!remote.contains(CONFIG_PATH));
    workspace.save_all().await.unwrap();

    assert!(remote.contains(CONFIG_PATH));
    assert!(!remote.contains(DEPT_MASTER_PATH));
    assert!(!remote.contains(DEPT_GROUPING_PATH));

    // The ref advanced: a second save updates in place.
    let first_sha = remote.sha_of(CONFIG_PATH).unwrap();
    workspace.save_all().await.unwrap();
    assert_ne!(remote.sha_of(CONFIG_PATH).unwrap(), first_sha);
}

#[tokio::test]
async fn registry_documents_saved_only_when_dirty() {
    let (remote, config) = support::start().await;
    let mut workspace = Workspace::connect(DocumentStore::new(config)).await.unwrap();

    workspace.registry.colleges.push(College {
        id: "col_mgmt".to_string(),
        name: "管理學院".to_string(),
        departments: vec!["dept_im".to_string()],
        ..College::default()
    });
    workspace.registry.master.insert(
        "dept_im".to_string(),
        DeptRecord {
            name: "資訊管理學系".to_string(),
            ..DeptRecord::default()
        },
    );

    // Not marked dirty: the registry documents stay untouched.
    workspace.save_all().await.unwrap();
    assert!(!remote.contains(DEPT_MASTER_PATH));
    assert!(!remote.contains(DEPT_GROUPING_PATH));

    workspace.mark_dirty();
    workspace.save_all().await.unwrap();
    assert!(remote.contains(DEPT_MASTER_PATH));
    assert!(remote.contains(DEPT_GROUPING_PATH));
    assert!(!workspace.is_dirty());
    assert!(remote.text_of(DEPT_MASTER_PATH).unwrap().contains("資訊管理學系"));
}

#[tokio::test]
async fn loaded_documents_round_trip() {
    let (remote, config) = support::start().await;
    remote.seed(
        CONFIG_PATH,
        r#"{"academicYears": [{"year": "114", "isDefault": true}]}"#,
    );
    remote.seed(
        DEPT_MASTER_PATH,
        r#"{"dept_im": {"name": "資訊管理學系", "short_name": "資管系"}}"#,
    );

    let workspace = Workspace::connect(DocumentStore::new(config)).await.unwrap();
    assert_eq!(workspace.config.default_year(), Some("114"));
    assert_eq!(
        workspace.registry.dept_display_name("dept_im", true, "114"),
        "資管系"
    );
}

#[tokio::test]
async fn select_year_seeds_missing_template_with_system_fields() {
    let (_remote, config) = support::start().await;
    let mut workspace = Workspace::connect(DocumentStore::new(config)).await.unwrap();

    workspace.select_year("115").await.unwrap();
    let template = workspace.year_template.as_ref().unwrap();
    assert_eq!(template.fields.len(), SYSTEM_FIELDS.len());
    assert_eq!(workspace.active_year(), Some("115"));
}

#[tokio::test]
async fn save_all_refetches_the_year_template_sha() {
    let (remote, config) = support::start().await;
    let path = year_template_path("114");
    remote.seed(&path, r#"{"fields": []}"#);

    let mut workspace = Workspace::connect(DocumentStore::new(config)).await.unwrap();
    workspace.select_year("114").await.unwrap();

    // An out-of-band writer replaces the template, changing its sha.
    remote.seed(&path, r#"{"fields": []}"#);

    // The save still succeeds: the current sha is fetched at write time.
    workspace.save_all().await.unwrap();
    assert!(remote.contains(&path));
}

#[tokio::test]
async fn active_year_falls_back_to_config_default() {
    let (remote, config) = support::start().await;
    remote.seed(
        CONFIG_PATH,
        r#"{"academicYears": [{"year": "113", "isDefault": false}, {"year": "114", "isDefault": true}]}"#,
    );

    let mut workspace = Workspace::connect(DocumentStore::new(config)).await.unwrap();
    assert_eq!(workspace.active_year(), Some("114"));

    workspace.select_year("113").await.unwrap();
    assert_eq!(workspace.active_year(), Some("113"));
}

#[tokio::test]
async fn malformed_config_document_surfaces_its_path() {
    let (remote, config) = support::start().await;
    remote.seed(CONFIG_PATH, "not-json{");

    let err = Workspace::connect(DocumentStore::new(config)).await.unwrap_err();
    match err {
        WorkspaceError::Malformed { path } => assert_eq!(path, CONFIG_PATH),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn conflicting_save_keeps_the_workspace_dirty() {
    let (remote, config) = support::start().await;
    let mut workspace = Workspace::connect(DocumentStore::new(config)).await.unwrap();
    workspace.mark_dirty();

    // Another writer created the config after we connected; our create
    // (no sha) now conflicts.
    remote.seed(CONFIG_PATH, "{}");

    let err = workspace.save_all().await.unwrap_err();
    assert!(matches!(err, WorkspaceError::Store(_)));
    assert!(workspace.is_dirty());
}
