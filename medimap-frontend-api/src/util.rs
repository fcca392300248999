use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use medimap_boundary::{DataEnvelope, SearchArea, SearchFilter};

use crate::Result;

pub fn decode_data<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: DataEnvelope<T> = serde_json::from_str(text)?;
    Ok(envelope.data)
}

pub fn decode_error(http_status: u16, text: &str) -> medimap_boundary::Error {
    serde_json::from_str(text).unwrap_or_else(|_| medimap_boundary::Error {
        http_status,
        message: if text.is_empty() {
            format!("HTTP error {http_status}")
        } else {
            text.to_string()
        },
    })
}

pub fn desc_url(base_url: &str, hospital_id: &str) -> String {
    let encoded_id = utf8_percent_encode(hospital_id, NON_ALPHANUMERIC);
    format!("{base_url}/desc/{encoded_id}")
}

pub fn search_url(base_url: &str, keyword: &str, area: Option<&SearchArea>) -> String {
    let encoded_keyword = utf8_percent_encode(keyword, NON_ALPHANUMERIC);
    let url = format!("{base_url}/search/{encoded_keyword}");
    match area {
        Some(area) => format!("{url}?{}", area_params(area)),
        None => url,
    }
}

pub fn filter_url(base_url: &str, filter: &SearchFilter, area: Option<&SearchArea>) -> String {
    let params = area
        .map(area_params)
        .into_iter()
        .chain(
            filter
                .criteria()
                .map(|(name, value)| format!("{name}={value}")),
        )
        .collect::<Vec<_>>()
        .join("&");
    if params.is_empty() {
        format!("{base_url}/filter")
    } else {
        format!("{base_url}/filter?{params}")
    }
}

fn area_params(area: &SearchArea) -> String {
    let SearchArea { e, w, s, n } = area;
    format!("e={e}&w={w}&s={s}&n={n}")
}
