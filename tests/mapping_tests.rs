//! Pure tests for models, DTO mapping, request validation and helpers. No database.

use chrono::{TimeZone, Utc};
use serde_json::json;

use projehub::auth::jwt::{Claims, decode_token, encode_token};
use projehub::config::DatabaseParts;
use projehub::db::projects::contains_pattern;
use projehub::dto::project::MAX_PROJECT_CODE_LEN;
use projehub::dto::{
    CreateProjectDto, OcrProjectDto, ProjectDto, ProjectListQuery, ProjectListRequest, RoleDto,
    TenantDto, UserDto,
};
use projehub::models::ocr_project::{InvalidOcrProjectType, child_code};
use projehub::models::{
    AuditInfo, NewOcrProject, OcrProject, OcrProjectType, Permission, Project, ProjectDetails,
    Role, Tenant, User,
};
use projehub::services::projects::build_filter;

fn audit() -> AuditInfo {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    AuditInfo {
        creator_user_id: Some(2),
        ..AuditInfo::new(at)
    }
}

fn ocr(id: i32, project_id: i32, kind: OcrProjectType) -> OcrProject {
    OcrProject {
        id,
        tenant_id: None,
        project_id,
        kind,
        project_name: "Residence".to_string(),
        project_code: child_code("R-1", kind),
        project_comment: String::new(),
        project_muellef: "Muellef".to_string(),
        ada: Some(101),
        parsel: None,
        talep_gucu: Some(30),
        kurulu_guc: None,
        bagimsiz_bs: Some(12),
        blok_s: None,
        yapi_yuksekligi: Some(21.5),
        ruhsat_gecerlilik_date: "2025-01-01".to_string(),
        yapi_sahibi: String::new(),
        adress: "Istanbul".to_string(),
        pdf_path: format!("/docs/{id}.pdf"),
        audit: audit(),
    }
}

fn project(children: usize) -> Project {
    Project {
        id: 10,
        tenant_id: Some(1),
        details: ProjectDetails {
            project_name: "Residence".to_string(),
            project_code: "R-1".to_string(),
            project_comment: "note".to_string(),
            project_muellef: "Muellef".to_string(),
            ada: Some(101),
            parsel: Some(7),
            talep_gucu: Some(30),
            kurulu_guc: Some(25),
            bagimsiz_bs: Some(12),
            blok_s: Some(2),
            yapi_yuksekligi: Some(21.5),
            ruhsat_gecerlilik_date: "2025-01-01".to_string(),
            yapi_sahibi: "Owner".to_string(),
            adress: "Istanbul".to_string(),
            group_id: Some(4),
            bildirim_no: "BN-9".to_string(),
        },
        audit: audit(),
        ocr_projects: OcrProjectType::ALL
            .iter()
            .cycle()
            .take(children)
            .enumerate()
            .map(|(i, &kind)| ocr(100 + i as i32, 10, kind))
            .collect(),
    }
}

// ── OCR project types ───────────────────────────────────────────

#[test]
fn ocr_type_labels_follow_ordinals() {
    let labels: Vec<(i32, &str)> = OcrProjectType::ALL
        .iter()
        .map(|t| (t.ordinal(), t.label()))
        .collect();
    assert_eq!(
        labels,
        vec![
            (0, "ProjeAntenti"),
            (1, "YapiRuhsati"),
            (2, "YapiKullanimBelgesi"),
            (3, "Tapu"),
        ]
    );
    assert_eq!(OcrProjectType::Tapu.to_string(), "Tapu");
}

#[test]
fn ocr_type_rejects_out_of_range_ordinals() {
    assert_eq!(OcrProjectType::try_from(2_i32), Ok(OcrProjectType::YapiKullanimBelgesi));
    assert_eq!(OcrProjectType::try_from(4_i32), Err(InvalidOcrProjectType(4)));
    assert_eq!(OcrProjectType::try_from(-1_i32), Err(InvalidOcrProjectType(-1)));
}

#[test]
fn default_children_are_one_per_type() {
    let parent = ProjectDetails {
        project_name: "Alpha".to_string(),
        project_code: "C1".to_string(),
        ..Default::default()
    };
    let children = NewOcrProject::defaults_for(5, &parent);

    assert_eq!(children.len(), 4);
    for (i, child) in children.iter().enumerate() {
        assert_eq!(child.project_id, 5);
        assert_eq!(child.kind.ordinal(), i as i32);
        assert_eq!(child.project_name, "Alpha");
        assert_eq!(child.project_code, format!("C1-OCR-{}", i + 1));
    }
}

// ── Audit ───────────────────────────────────────────────────────

#[test]
fn soft_deleted_returns_new_state() {
    let before = audit();
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();

    let after = before.soft_deleted(9, now);

    assert!(after.is_deleted);
    assert_eq!(after.deleter_user_id, Some(9));
    assert_eq!(after.deletion_time, Some(now));
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.creator_user_id, Some(2));

    assert!(!before.is_deleted);
    assert_eq!(before.deleter_user_id, None);
}

// ── DTO mapping ─────────────────────────────────────────────────

#[test]
fn project_dto_round_trip_preserves_fields_and_children() {
    for n in [0, 1, 4, 6] {
        let original = project(n);
        let dto = ProjectDto::from(&original);

        assert_eq!(dto.ocr_projects.len(), n);
        for (child, dto_child) in original.ocr_projects.iter().zip(&dto.ocr_projects) {
            assert_eq!(dto_child.kind, child.kind.ordinal());
            assert_eq!(dto_child.type_name, child.kind.label());
        }

        let back = Project::try_from(dto).unwrap();
        assert_eq!(back, original);
    }
}

#[test]
fn project_dto_round_trips_through_json() {
    let original = project(4);
    let json = serde_json::to_value(ProjectDto::from(&original)).unwrap();
    let dto: ProjectDto = serde_json::from_value(json).unwrap();
    assert_eq!(Project::try_from(dto).unwrap(), original);
}

#[test]
fn project_dto_rejects_unknown_child_type() {
    let mut dto = ProjectDto::from(&project(2));
    dto.ocr_projects[1].kind = 7;
    assert_eq!(Project::try_from(dto), Err(InvalidOcrProjectType(7)));
}

#[test]
fn dto_json_uses_wire_names() {
    let json = serde_json::to_value(ProjectDto::from(&project(1))).unwrap();

    assert_eq!(json["projectName"], "Residence");
    assert_eq!(json["bagimsizBS"], 12);
    assert_eq!(json["yapiYuksekligi"], 21.5);
    assert_eq!(json["isDeleted"], false);
    assert_eq!(json["creatorUserId"], 2);
    assert_eq!(json["createdAt"], "2024-03-01T12:00:00Z");
    assert!(json.get("deletionTime").is_none());

    let child = &json["ocrProjects"][0];
    assert_eq!(child["type"], 0);
    assert_eq!(child["typeName"], "ProjeAntenti");
    assert_eq!(child["projectCode"], "R-1-OCR-1");
    assert_eq!(child["pdfPath"], "/docs/100.pdf");
    assert!(child.get("projectComment").is_none());
}

#[test]
fn ocr_dto_ignores_incoming_type_name() {
    let mut dto = OcrProjectDto::from(&ocr(1, 2, OcrProjectType::YapiRuhsati));
    dto.type_name = "Tapu".to_string();
    let back = OcrProject::try_from(dto).unwrap();
    assert_eq!(back.kind, OcrProjectType::YapiRuhsati);
}

// ── Request validation ──────────────────────────────────────────

#[test]
fn create_dto_requires_name_and_code() {
    let dto: CreateProjectDto = serde_json::from_value(json!({ "projectName": "  " })).unwrap();
    let errors = dto.validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["projectName", "projectCode"]);
}

#[test]
fn create_dto_enforces_column_widths() {
    let dto: CreateProjectDto = serde_json::from_value(json!({
        "projectName": "Ok",
        "projectCode": "C".repeat(101),
        "ruhsatGecerlilikDate": "d".repeat(51),
    }))
    .unwrap();
    let errors = dto.validate().unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["projectCode", "ruhsatGecerlilikDate"]);
}

#[test]
fn create_dto_code_leaves_room_for_child_suffix() {
    let code = |len: usize| -> CreateProjectDto {
        serde_json::from_value(json!({ "projectName": "Ok", "projectCode": "C".repeat(len) })).unwrap()
    };

    let details = code(MAX_PROJECT_CODE_LEN).validate().unwrap();
    assert_eq!(child_code(&details.project_code, OcrProjectType::Tapu).len(), 100);

    let errors = code(MAX_PROJECT_CODE_LEN + 1).validate().unwrap_err();
    assert_eq!(errors[0].field, "projectCode");
}

#[test]
fn create_dto_maps_omitted_fields_to_empty() {
    let dto: CreateProjectDto = serde_json::from_value(json!({
        "projectName": "Alpha",
        "projectCode": "C1",
        "bagimsizBS": 3,
    }))
    .unwrap();
    let details = dto.validate().unwrap();
    assert_eq!(details.bagimsiz_bs, Some(3));
    assert_eq!(details.project_comment, "");
    assert_eq!(details.group_id, None);
}

#[test]
fn list_query_validates_paging() {
    let ok = ProjectListQuery {
        page_number: Some(3),
        page_size: Some(20),
        ..Default::default()
    }
    .validate()
    .unwrap();
    assert_eq!(ok.offset(), 40);
    assert_eq!(ok.group_id, 0);

    let deep = ProjectListQuery {
        page_number: Some(i64::MAX / 10),
        page_size: Some(100),
        ..Default::default()
    }
    .validate()
    .unwrap();
    assert_eq!(deep.offset(), i64::MAX);

    let errors = ProjectListQuery {
        page_number: None,
        page_size: Some(101),
        ..Default::default()
    }
    .validate()
    .unwrap_err();
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["pageNumber", "pageSize"]);
}

#[test]
fn build_filter_drops_zero_and_empty_values() {
    let req = ProjectListRequest {
        page_number: 1,
        page_size: 10,
        group_id: 0,
        bildirim_no: String::new(),
        project_code: "C1".to_string(),
        project_name: String::new(),
        project_muellef: String::new(),
        id_list: vec![1, 2],
    };
    let filter = build_filter(&req);
    assert_eq!(filter.group_id, None);
    assert_eq!(filter.bildirim_no, None);
    assert_eq!(filter.project_code.as_deref(), Some("C1"));
    assert_eq!(filter.id_list, vec![1, 2]);

    let filter = build_filter(&ProjectListRequest {
        group_id: 6,
        ..req
    });
    assert_eq!(filter.group_id, Some(6));
}

#[test]
fn contains_pattern_escapes_wildcards() {
    assert_eq!(contains_pattern("AB"), "%AB%");
    assert_eq!(contains_pattern("50%_x"), "%50\\%\\_x%");
    assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
}

// ── Auth & config ───────────────────────────────────────────────

#[test]
fn jwt_round_trip() {
    let claims = Claims::new(17, Some(3), 1);
    let token = encode_token(&claims, "secret").unwrap();
    assert_eq!(decode_token(&token, "secret").unwrap(), claims);
    assert!(decode_token(&token, "other-secret").is_err());
    assert!(decode_token("not-a-token", "secret").is_err());
}

#[test]
fn expired_jwt_is_rejected() {
    let claims = Claims::new(17, None, -2);
    let token = encode_token(&claims, "secret").unwrap();
    assert!(decode_token(&token, "secret").is_err());
}

#[test]
fn database_url_from_parts() {
    let parts = DatabaseParts {
        host: "db.local".to_string(),
        port: 5433,
        user: "postgres".to_string(),
        password: "pw".to_string(),
        name: "projehub".to_string(),
        sslmode: "disable".to_string(),
    };
    assert_eq!(
        parts.url(),
        "postgres://postgres:pw@db.local:5433/projehub?sslmode=disable"
    );
}

// ── Scaffolding DTOs ────────────────────────────────────────────

#[test]
fn user_dto_carries_full_name_and_roles() {
    let user = User {
        id: 1,
        tenant_id: None,
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        password_hash: "hash".to_string(),
        name: "Ada".to_string(),
        surname: "Yilmaz".to_string(),
        is_active: true,
        email_confirmed: true,
        phone_number: String::new(),
        phone_number_confirmed: false,
        lockout_enabled: false,
        lockout_end_date: None,
        access_failed_count: 0,
        audit: audit(),
    };
    let role = Role {
        id: 1,
        tenant_id: None,
        name: "Admin".to_string(),
        display_name: "Administrator".to_string(),
        description: String::new(),
        is_static: true,
        is_default: false,
        audit: audit(),
    };
    let permission = Permission {
        id: 1,
        name: "Pages.Users".to_string(),
        display_name: "Users".to_string(),
        description: "Access to users page".to_string(),
        created_at: audit().created_at,
        updated_at: audit().updated_at,
    };

    let dto = UserDto::new(&user, vec![RoleDto::new(&role, &[permission])]);
    assert_eq!(dto.full_name, "Ada Yilmaz");

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["fullName"], "Ada Yilmaz");
    assert_eq!(json["roles"][0]["name"], "Admin");
    assert_eq!(json["roles"][0]["permissions"][0]["name"], "Pages.Users");
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("phoneNumber").is_none());

    let single = User {
        surname: String::new(),
        ..user
    };
    assert_eq!(single.full_name(), "Ada");
}

#[test]
fn tenant_dto_hides_connection_string() {
    let tenant = Tenant {
        id: 3,
        tenancy_name: "default".to_string(),
        name: "Default".to_string(),
        connection_string: "postgres://secret".to_string(),
        is_active: true,
        edition_id: None,
        audit: audit(),
    };

    let json = serde_json::to_value(TenantDto::from(&tenant)).unwrap();
    assert_eq!(json["tenancyName"], "default");
    assert_eq!(json["isActive"], true);
    assert!(json.get("connectionString").is_none());
    assert!(json.get("editionId").is_none());
}
