use serde::{Deserialize, Serialize};

use super::audit::AuditDto;
use crate::models::ocr_project::InvalidOcrProjectType;
use crate::models::{OcrProject, OcrProjectType};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrProjectDto {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<i32>,
    #[serde(flatten)]
    pub audit: AuditDto,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
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
    #[serde(rename = "type")]
    pub kind: i32,
    pub type_name: String,
    pub project_id: i32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pdf_path: String,
}

impl From<&OcrProject> for OcrProjectDto {
    fn from(ocr: &OcrProject) -> Self {
        Self {
            id: ocr.id,
            tenant_id: ocr.tenant_id,
            audit: AuditDto::from(&ocr.audit),
            project_name: ocr.project_name.clone(),
            project_code: ocr.project_code.clone(),
            project_comment: ocr.project_comment.clone(),
            project_muellef: ocr.project_muellef.clone(),
            ada: ocr.ada,
            parsel: ocr.parsel,
            talep_gucu: ocr.talep_gucu,
            kurulu_guc: ocr.kurulu_guc,
            bagimsiz_bs: ocr.bagimsiz_bs,
            blok_s: ocr.blok_s,
            yapi_yuksekligi: ocr.yapi_yuksekligi,
            ruhsat_gecerlilik_date: ocr.ruhsat_gecerlilik_date.clone(),
            yapi_sahibi: ocr.yapi_sahibi.clone(),
            adress: ocr.adress.clone(),
            kind: ocr.kind.ordinal(),
            type_name: ocr.kind.label().to_string(),
            project_id: ocr.project_id,
            pdf_path: ocr.pdf_path.clone(),
        }
    }
}

/// Rejects ordinals outside the known document categories. `typeName` is
/// derived from `type` and ignored on the way in.
impl TryFrom<OcrProjectDto> for OcrProject {
    type Error = InvalidOcrProjectType;

    fn try_from(dto: OcrProjectDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: dto.id,
            tenant_id: dto.tenant_id,
            project_id: dto.project_id,
            kind: OcrProjectType::try_from(dto.kind)?,
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
            pdf_path: dto.pdf_path,
            audit: dto.audit.into(),
        })
    }
}
