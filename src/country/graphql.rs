//! Wire types for the countries GraphQL endpoint.

use serde::{Deserialize, Serialize};

use super::code::CountryCode;
use super::error::ClientError;
use super::record::CountryRecord;

pub const GET_COUNTRY_OPERATION: &str = "GetCountry";

pub const GET_COUNTRY_QUERY: &str = r#"query GetCountry($code: ID!) {
  country(code: $code) {
    name
    native
    capital
    emoji
    currency
    languages {
      code
      name
    }
  }
}"#;

/// JSON body POSTed to the endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a> {
    pub query: &'static str,
    pub variables: CountryVariables<'a>,
    #[serde(rename = "operationName")]
    pub operation_name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CountryVariables<'a> {
    pub code: &'a str,
}

impl<'a> GraphqlRequest<'a> {
    pub fn get_country(code: &'a CountryCode) -> Self {
        Self {
            query: GET_COUNTRY_QUERY,
            variables: CountryVariables {
                code: code.as_str(),
            },
            operation_name: GET_COUNTRY_OPERATION,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    pub data: Option<CountryData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct CountryData {
    pub country: Option<CountryRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

impl GraphqlResponse {
    /// Reduce a decoded response to the record for `code`.
    ///
    /// GraphQL errors win over partial data.
    pub fn into_record(self, code: &CountryCode) -> Result<CountryRecord, ClientError> {
        if !self.errors.is_empty() {
            return Err(ClientError::Graphql {
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        match self.data {
            Some(CountryData {
                country: Some(record),
            }) => Ok(record),
            Some(CountryData { country: None }) => Err(ClientError::NotFound {
                code: code.to_string(),
            }),
            None => Err(ClientError::Decode("response has neither data nor errors".into())),
        }
    }
}
