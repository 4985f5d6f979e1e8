/*
 * Responsibility
 * - /profile request/response DTO
 * - Dates travel as `YYYY-MM-DD` (chrono NaiveDate's serde format)
 * - Request → profile_repo::ProfileUpdate conversion
 */
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::repos::profile_repo::{
    EducationRow, EducationUpdate, LicenseRow, LicenseUpdate, LocationRow, LocationUpdate,
    ProfileUpdate, WorkExperienceRow, WorkExperienceUpdate,
};
use crate::repos::user_repo::UserRow;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LocationDto {
    pub country_region: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EducationResponse {
    pub id: i64,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct WorkExperienceResponse {
    pub id: i64,
    pub company: Option<String>,
    pub role_title: Option<String>,
    pub job_description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct LicenseResponse {
    pub id: i64,
    pub name: Option<String>,
    pub issuing_organization: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub credentials_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub full_name: String,
    pub email: String,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub location: LocationDto,
    pub education: Vec<EducationResponse>,
    pub work_experience: Vec<WorkExperienceResponse>,
    pub licenses_certifications: Vec<LicenseResponse>,
}

impl ProfileResponse {
    pub fn new(
        user: UserRow,
        location: Option<LocationRow>,
        education: Vec<EducationRow>,
        work_experience: Vec<WorkExperienceRow>,
        licenses: Vec<LicenseRow>,
    ) -> Self {
        Self {
            full_name: user.full_name,
            email: user.email,
            bio: user.bio,
            profile_image: user.profile_image,
            location: location
                .map(|l| LocationDto {
                    country_region: l.country_region,
                    city: l.city,
                })
                .unwrap_or_default(),
            education: education
                .into_iter()
                .map(|e| EducationResponse {
                    id: e.id,
                    school: e.school,
                    degree: e.degree,
                    field_of_study: e.field_of_study,
                    start_date: e.start_date,
                    end_date: e.end_date,
                })
                .collect(),
            work_experience: work_experience
                .into_iter()
                .map(|w| WorkExperienceResponse {
                    id: w.id,
                    company: w.company,
                    role_title: w.role_title,
                    job_description: w.job_description,
                    start_date: w.start_date,
                    end_date: w.end_date,
                })
                .collect(),
            licenses_certifications: licenses
                .into_iter()
                .map(|l| LicenseResponse {
                    id: l.id,
                    name: l.name,
                    issuing_organization: l.issuing_organization,
                    issue_date: l.issue_date,
                    expiration_date: l.expiration_date,
                    credentials_id: l.credentials_id,
                    credential_url: l.credential_url,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EducationInput {
    pub id: Option<i64>,
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkExperienceInput {
    pub id: Option<i64>,
    pub company: Option<String>,
    pub role_title: Option<String>,
    pub job_description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LicenseInput {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub issuing_organization: Option<String>,
    pub issue_date: Option<NaiveDate>,
    pub expiration_date: Option<NaiveDate>,
    pub credentials_id: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub location: Option<LocationDto>,
    pub education: Vec<EducationInput>,
    pub work_experience: Vec<WorkExperienceInput>,
    pub licenses_certifications: Vec<LicenseInput>,
}

impl UpdateProfileRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(name) = &self.full_name
            && name.trim().is_empty()
        {
            return Err("full_name cannot be empty");
        }

        let bad_range = |start: Option<NaiveDate>, end: Option<NaiveDate>| {
            matches!((start, end), (Some(s), Some(e)) if e < s)
        };
        if self
            .education
            .iter()
            .any(|e| bad_range(e.start_date, e.end_date))
            || self
                .work_experience
                .iter()
                .any(|w| bad_range(w.start_date, w.end_date))
        {
            return Err("end_date must not be before start_date");
        }
        if self
            .licenses_certifications
            .iter()
            .any(|l| bad_range(l.issue_date, l.expiration_date))
        {
            return Err("expiration_date must not be before issue_date");
        }

        Ok(())
    }
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            full_name: req.full_name.map(|n| n.trim().to_string()),
            bio: req.bio,
            profile_image: req.profile_image,
            location: req.location.map(|l| LocationUpdate {
                country_region: l.country_region,
                city: l.city,
            }),
            education: req
                .education
                .into_iter()
                .map(|e| EducationUpdate {
                    id: e.id,
                    school: e.school,
                    degree: e.degree,
                    field_of_study: e.field_of_study,
                    start_date: e.start_date,
                    end_date: e.end_date,
                })
                .collect(),
            work_experience: req
                .work_experience
                .into_iter()
                .map(|w| WorkExperienceUpdate {
                    id: w.id,
                    company: w.company,
                    role_title: w.role_title,
                    job_description: w.job_description,
                    start_date: w.start_date,
                    end_date: w.end_date,
                })
                .collect(),
            licenses_certifications: req
                .licenses_certifications
                .into_iter()
                .map(|l| LicenseUpdate {
                    id: l.id,
                    name: l.name,
                    issuing_organization: l.issuing_organization,
                    issue_date: l.issue_date,
                    expiration_date: l.expiration_date,
                    credentials_id: l.credentials_id,
                    credential_url: l.credential_url,
                })
                .collect(),
        }
    }
}
