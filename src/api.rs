//! SpaceX REST client (v4). The rendering subsystem never talks to this
//! layer; the owning component fetches here and passes data down as props.

use gloo_net::http::Request;

use crate::model::{Launch, Launchpad};

pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com";

#[derive(Clone, Debug)]
pub struct SpaceX {
    base_url: String,
}

impl Default for SpaceX {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl SpaceX {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub async fn launches(&self) -> Result<Vec<Launch>, gloo_net::Error> {
        Request::get(&format!("{}/v4/launches", self.base_url))
            .send()
            .await?
            .json()
            .await
    }

    pub async fn launchpads(&self) -> Result<Vec<Launchpad>, gloo_net::Error> {
        Request::get(&format!("{}/v4/launchpads", self.base_url))
            .send()
            .await?
            .json()
            .await
    }
}
