use serde::{Deserialize, Serialize};

use super::audit::AuditDto;
use super::ocr_project::OcrProjectDto;
use super::FieldError;
use crate::models::ocr_project::InvalidOcrProjectType;
use crate::models::{OcrProject, Project, ProjectDetails};

pub const MAX_PAGE_SIZE: i64 = 100;

/// Leaves room for the `-OCR-n` suffix within the 100-character child column.
pub const MAX_PROJECT_CODE_LEN: usize = 94;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i32>,
    #[serde(flatten)]
    pub audit: AuditDto,
    pub project_name: String,
    pub project_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_muellef: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ada: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsel: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talep_gucu: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kurulu_guc: Option<i32>,
    #[serde(default, rename = "bagimsizBS", skip_serializing_if = "Option::is_none")]
    pub bagimsiz_bs: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blok_s: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yapi_yuksekligi: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ruhsat_gecerlilik_date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub yapi_sahibi: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub adress: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bildirim_no: String,
    #[serde(default)]
    pub ocr_projects: Vec<OcrProjectDto>,
}

impl From<&Project> for ProjectDto {
    fn from(project: &Project) -> Self {
        let d = &project.details;
        Self {
            id: project.id,
            tenant_id: project.tenant_id,
            audit: AuditDto::from(&project.audit),
            project_name: d.project_name.clone(),
            project_code: d.project_code.clone(),
            project_comment: d.project_comment.clone(),
            project_muellef: d.project_muellef.clone(),
            ada: d.ada,
            parsel: d.parsel,
            talep_gucu: d.talep_gucu,
            kurulu_guc: d.kurulu_guc,
            bagimsiz_bs: d.bagimsiz_bs,
            blok_s: d.blok_s,
            yapi_yuksekligi: d.yapi_yuksekligi,
            ruhsat_gecerlilik_date: d.ruhsat_gecerlilik_date.clone(),
            yapi_sahibi: d.yapi_sahibi.clone(),
            adress: d.adress.clone(),
            group_id: d.group_id,
            bildirim_no: d.bildirim_no.clone(),
            ocr_projects: project.ocr_projects.iter().map(OcrProjectDto::from).collect(),
        }
    }
}

impl TryFrom<ProjectDto> for Project {
    type Error = InvalidOcrProjectType;

    fn try_from(dto: ProjectDto) -> Result<Self, Self::Error> {
        let ocr_projects = dto
            .ocr_projects
            .into_iter()
            .map(OcrProject::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: dto.id,
            tenant_id: dto.tenant_id,
            details: ProjectDetails {
                project_name: dto.project_name,
                project_code: dto.project_code,
                project_comment: dto.project_comment,
                project_muellef: dto.project_muellef,
                ada: dto.ada,
                parsel: dto.parsel,
                talep_gucu: dto.talep_gucu,
                kurulu_guc: dto.kurulu_guc,
                bagimsiz_bs: dto.bagimsiz_bs,
                blok_s: dto.blok_s,
                yapi_yuksekligi: dto.yapi_yuksekligi,
                ruhsat_gecerlilik_date: dto.ruhsat_gecerlilik_date,
                yapi_sahibi: dto.yapi_sahibi,
                adress: dto.adress,
                group_id: dto.group_id,
                bildirim_no: dto.bildirim_no,
            },
            audit: dto.audit.into(),
            ocr_projects,
        })
    }
}

/// Request body for creating a project. Absent fields deserialize to empty
/// values, which is what gives updates their full-replace behavior.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProjectDto {
    pub project_name: String,
    pub project_code: String,
    pub project_comment: String,
    pub project_muellef: String,
    pub ada: Option<i32>,
    pub parsel: Option<i32>,
    pub talep_gucu: Option<i32>,
    pub kurulu_guc: Option<i32>,
    #[serde(rename = "bagimsizBS")]
    pub bagimsiz_bs: Option<i32>,
    pub blok_s: Option<i32>,
    pub yapi_yuksekligi: Option<f64>,
    pub ruhsat_gecerlilik_date: String,
    pub yapi_sahibi: String,
    pub adress: String,
    pub group_id: Option<i32>,
    pub bildirim_no: String,
}

pub type UpdateProjectDto = CreateProjectDto;

impl CreateProjectDto {
    /// Checks required fields and column widths, then hands back the storable details.
    pub fn validate(self) -> Result<ProjectDetails, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.project_name.trim().is_empty() {
            errors.push(FieldError::new("projectName", "is required"));
        }
        if self.project_code.trim().is_empty() {
            errors.push(FieldError::new("projectCode", "is required"));
        }

        for (field, value, max) in [
            ("projectName", &self.project_name, 255),
            ("projectCode", &self.project_code, MAX_PROJECT_CODE_LEN),
            ("projectMuellef", &self.project_muellef, 255),
            ("ruhsatGecerlilikDate", &self.ruhsat_gecerlilik_date, 50),
            ("yapiSahibi", &self.yapi_sahibi, 255),
            ("bildirimNo", &self.bildirim_no, 100),
        ] {
            if value.chars().count() > max {
                errors.push(FieldError::new(
                    field,
                    format!("must be at most {max} characters"),
                ));
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProjectDetails {
            project_name: self.project_name,
            project_code: self.project_code,
            project_comment: self.project_comment,
            project_muellef: self.project_muellef,
            ada: self.ada,
            parsel: self.parsel,
            talep_gucu: self.talep_gucu,
            kurulu_guc: self.kurulu_guc,
            bagimsiz_bs: self.bagimsiz_bs,
            blok_s: self.blok_s,
            yapi_yuksekligi: self.yapi_yuksekligi,
            ruhsat_gecerlilik_date: self.ruhsat_gecerlilik_date,
            yapi_sahibi: self.yapi_sahibi,
            adress: self.adress,
            group_id: self.group_id,
            bildirim_no: self.bildirim_no,
        })
    }
}

/// Raw `GET /projects` query string. `idList` may repeat.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListQuery {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub group_id: Option<i32>,
    pub bildirim_no: Option<String>,
    pub project_code: Option<String>,
    pub project_name: Option<String>,
    pub project_muellef: Option<String>,
    #[serde(default)]
    pub id_list: Vec<i32>,
}

/// A validated list request. Zero and empty values mean "not filtered".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectListRequest {
    pub page_number: i64,
    pub page_size: i64,
    pub group_id: i32,
    pub bildirim_no: String,
    pub project_code: String,
    pub project_name: String,
    pub project_muellef: String,
    pub id_list: Vec<i32>,
}

impl ProjectListRequest {
    /// Saturates instead of overflowing, so an absurdly deep page is simply empty.
    pub fn offset(&self) -> i64 {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

impl ProjectListQuery {
    pub fn validate(self) -> Result<ProjectListRequest, Vec<FieldError>> {
        let mut errors = Vec::new();

        match self.page_number {
            None => errors.push(FieldError::new("pageNumber", "is required")),
            Some(n) if n < 1 => errors.push(FieldError::new("pageNumber", "must be at least 1")),
            Some(_) => {}
        }
        match self.page_size {
            None => errors.push(FieldError::new("pageSize", "is required")),
            Some(n) if !(1..=MAX_PAGE_SIZE).contains(&n) => errors.push(FieldError::new(
                "pageSize",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            )),
            Some(_) => {}
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProjectListRequest {
            page_number: self.page_number.unwrap_or(1),
            page_size: self.page_size.unwrap_or(MAX_PAGE_SIZE),
            group_id: self.group_id.unwrap_or(0),
            bildirim_no: self.bildirim_no.unwrap_or_default(),
            project_code: self.project_code.unwrap_or_default(),
            project_name: self.project_name.unwrap_or_default(),
            project_muellef: self.project_muellef.unwrap_or_default(),
            id_list: self.id_list,
        })
    }
}
