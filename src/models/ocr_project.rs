use std::fmt;

use super::audit::AuditInfo;
use super::project::ProjectDetails;

/// Document category of an OCR sub-project. Stored as its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum OcrProjectType {
    ProjeAntenti = 0,
    YapiRuhsati = 1,
    YapiKullanimBelgesi = 2,
    Tapu = 3,
}

impl OcrProjectType {
    /// Every type in ordinal order. Project creation spawns one child per entry.
    pub const ALL: [OcrProjectType; 4] = [
        OcrProjectType::ProjeAntenti,
        OcrProjectType::YapiRuhsati,
        OcrProjectType::YapiKullanimBelgesi,
        OcrProjectType::Tapu,
    ];

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            OcrProjectType::ProjeAntenti => "ProjeAntenti",
            OcrProjectType::YapiRuhsati => "YapiRuhsati",
            OcrProjectType::YapiKullanimBelgesi => "YapiKullanimBelgesi",
            OcrProjectType::Tapu => "Tapu",
        }
    }
}

impl fmt::Display for OcrProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidOcrProjectType(pub i32);

impl fmt::Display for InvalidOcrProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid OCR project type ordinal: {}", self.0)
    }
}

impl std::error::Error for InvalidOcrProjectType {}

impl TryFrom<i32> for OcrProjectType {
    type Error = InvalidOcrProjectType;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(InvalidOcrProjectType(value))
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct OcrProject {
    pub id: i32,
    pub tenant_id: Option<i32>,
    pub project_id: i32,
    #[sqlx(rename = "type")]
    pub kind: OcrProjectType,
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
    pub pdf_path: String,
    #[sqlx(flatten)]
    pub audit: AuditInfo,
}

/// Insert payload for the OCR children spawned alongside a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOcrProject {
    pub project_id: i32,
    pub kind: OcrProjectType,
    pub project_name: String,
    pub project_code: String,
}

impl NewOcrProject {
    /// The four children of a freshly inserted project, one per type, in ordinal order.
    pub fn defaults_for(project_id: i32, parent: &ProjectDetails) -> Vec<NewOcrProject> {
        OcrProjectType::ALL
            .iter()
            .map(|&kind| NewOcrProject {
                project_id,
                kind,
                project_name: parent.project_name.clone(),
                project_code: child_code(&parent.project_code, kind),
            })
            .collect()
    }
}

/// `<parent>-OCR-<n>` with a 1-based suffix.
pub fn child_code(parent_code: &str, kind: OcrProjectType) -> String {
    format!("{parent_code}-OCR-{}", kind.ordinal() + 1)
}
