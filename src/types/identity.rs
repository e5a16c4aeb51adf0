//! BVN identity records

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::extract;

/// Identity record behind a Bank Verification Number.
///
/// The registry always returns the core identity; everything else depends on
/// what was captured at enrollment and reads as an empty string when the API
/// sends `null` or omits the key.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BvnDetails {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(rename = "BVN")]
    pub bvn: String,
    pub date_of_birth: String,
    pub enrollment_bank: String,
    pub enrollment_branch: String,
    pub gender: String,
    pub level_of_account: String,
    pub lga_of_origin: String,
    pub lga_of_residence: String,
    pub marital_status: String,
    pub name_on_card: String,
    pub nationality: String,
    pub state_of_origin: String,
    pub state_of_residence: String,
    pub title: String,
    pub watch_listed: String,
    /// Base64 portrait when the registry holds one
    pub picture: String,
}

impl BvnDetails {
    pub(crate) fn from_json(body: &Value) -> Result<Self> {
        Ok(Self {
            first_name: extract::required_str(body, "FirstName")?,
            last_name: extract::required_str(body, "LastName")?,
            email: extract::required_str(body, "Email")?,
            phone_number: extract::required_str(body, "PhoneNumber")?,
            bvn: extract::required_str(body, "BVN")?,
            date_of_birth: extract::required_str(body, "DateOfBirth")?,
            middle_name: extract::optional_str(body, "MiddleName")?,
            enrollment_bank: extract::optional_str(body, "EnrollmentBank")?,
            enrollment_branch: extract::optional_str(body, "EnrollmentBranch")?,
            gender: extract::optional_str(body, "Gender")?,
            level_of_account: extract::optional_str(body, "LevelOfAccount")?,
            lga_of_origin: extract::optional_str(body, "LgaOfOrigin")?,
            lga_of_residence: extract::optional_str(body, "LgaOfResidence")?,
            marital_status: extract::optional_str(body, "MaritalStatus")?,
            name_on_card: extract::optional_str(body, "NameOnCard")?,
            nationality: extract::optional_str(body, "Nationality")?,
            state_of_origin: extract::optional_str(body, "StateOfOrigin")?,
            state_of_residence: extract::optional_str(body, "StateOfResidence")?,
            title: extract::optional_str(body, "Title")?,
            watch_listed: extract::optional_str(body, "WatchListed")?,
            picture: extract::optional_str(body, "Picture")?,
        })
    }
}
