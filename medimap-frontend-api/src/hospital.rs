use gloo_net::http::Request;

use medimap_boundary::{HospitalBasic, HospitalDesc, SearchArea, SearchFilter};

use crate::{into_data, util, Result};

/// Client of the hospital service.
#[derive(Clone)]
pub struct HospitalApi {
    url: String,
}

impl HospitalApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn hospital_desc(&self, hospital_id: &str) -> Result<HospitalDesc> {
        let url = util::desc_url(&self.url, hospital_id);
        let response = Request::get(&url).send().await?;
        into_data(response).await
    }

    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        area: Option<&SearchArea>,
    ) -> Result<Vec<HospitalBasic>> {
        let url = util::search_url(&self.url, keyword, area);
        let response = Request::get(&url).send().await?;
        into_data(response).await
    }

    /// Searches the area by department and opening hours.
    pub async fn search_filtered(
        &self,
        filter: &SearchFilter,
        area: Option<&SearchArea>,
    ) -> Result<Vec<HospitalBasic>> {
        let url = util::filter_url(&self.url, filter, area);
        let response = Request::get(&url).send().await?;
        into_data(response).await
    }
}
