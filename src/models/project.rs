use super::audit::AuditInfo;
use super::ocr_project::OcrProject;

/// Every field a client can set on a project. Updates replace all of them at once.
#[derive(Debug, Clone, Default, PartialEq, sqlx::FromRow)]
pub struct ProjectDetails {
    pub project_name: String,
    pub project_code: String,
    pub project_comment: String,
    pub project_muellef: String,
    pub ada: Option<i32>,
    pub parsel: Option<i32>,
    pub talep_gucu: Option<i32>,
    pub kurulu_guc: Option<i32>,
    pub bagimsiz_bs: Option<i32>,
    pub blok_s: Option<i32>,
    pub yapi_yuksekligi: Option<f64>,
    pub ruhsat_gecerlilik_date: String,
    pub yapi_sahibi: String,
    pub adress: String,
    pub group_id: Option<i32>,
    pub bildirim_no: String,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: i32,
    pub tenant_id: Option<i32>,
    #[sqlx(flatten)]
    pub details: ProjectDetails,
    #[sqlx(flatten)]
    pub audit: AuditInfo,
    #[sqlx(skip)]
    pub ocr_projects: Vec<OcrProject>,
}
