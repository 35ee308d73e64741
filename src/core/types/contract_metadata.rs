use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Descriptive information about the contract, exposed for discovery tooling.  None of these
/// values influence the behavior of the asset routes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct ContractMetadata {
    pub title: String,
    pub description: Option<String>,
    pub license: Option<LicenseMetadata>,
    pub contact: Option<ContactMetadata>,
}
impl ContractMetadata {
    pub fn new<S: Into<String>>(
        title: S,
        description: Option<String>,
        license: Option<LicenseMetadata>,
        contact: Option<ContactMetadata>,
    ) -> Self {
        ContractMetadata {
            title: title.into(),
            description,
            license,
            contact,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct LicenseMetadata {
    pub name: String,
    pub url: Option<String>,
}
impl LicenseMetadata {
    pub fn new<S: Into<String>>(name: S, url: Option<String>) -> Self {
        LicenseMetadata {
            name: name.into(),
            url,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct ContactMetadata {
    pub name: String,
    pub email: Option<String>,
    pub url: Option<String>,
}
impl ContactMetadata {
    pub fn new<S: Into<String>>(name: S, email: Option<String>, url: Option<String>) -> Self {
        ContactMetadata {
            name: name.into(),
            email,
            url,
        }
    }
}
