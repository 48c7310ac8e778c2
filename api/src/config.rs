use crate::{domain::endpoint::EndpointList, error::FetchError};

/// Compiled-in settings for a run. Nothing here is read from the
/// command line or the environment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchConfig {
    pub endpoints: EndpointList,
}

impl FetchConfig {
    pub fn with_base_url(base: &str) -> Result<Self, FetchError> {
        Ok(FetchConfig {
            endpoints: EndpointList::from_base_url(base)?,
        })
    }
}
