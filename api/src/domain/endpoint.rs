use url::Url;

use crate::error::FetchError;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// User ids queried by a run, in request order.
pub const USER_IDS: [u32; 3] = [1, 2, 3];

/// The fixed, ordered endpoints a run walks through. Always exactly three.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointList([String; 3]);

impl Default for EndpointList {
    fn default() -> Self {
        EndpointList([
            String::from("https://dummyjson.com/users/1"),
            String::from("https://dummyjson.com/users/2"),
            String::from("https://dummyjson.com/users/3"),
        ])
    }
}

impl EndpointList {
    /// Builds `{base}/users/{id}` for each of [`USER_IDS`].
    pub fn from_base_url(base: &str) -> Result<Self, FetchError> {
        let parsed = Url::parse(base).map_err(|_| FetchError::InvalidEndpoint(base.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(FetchError::InvalidEndpoint(base.to_string()));
        }
        let root = parsed.as_str().trim_end_matches('/');
        Ok(EndpointList(
            USER_IDS.map(|id| format!("{}/users/{}", root, id)),
        ))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<'a> IntoIterator for &'a EndpointList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
