use serde::{Deserialize, Deserializer, Serialize};

/// Decodes `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response body of the hospital service.
///
/// Every successful response wraps its payload into a `data` field.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Hospital summary as delivered by the search endpoints.
///
/// `hospital_x` is the longitude and `hospital_y` the latitude.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct HospitalBasic {
    pub hospital_id      : i64,
    pub hospital_name    : String,
    pub hospital_x       : f64,
    pub hospital_y       : f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_address : Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_tel     : Option<String>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(default)]
pub struct HospitalDesc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub departments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<HospitalTime>,
}

/// Opening information of a hospital.
///
/// `holiday` and `night` are flags encoded as `0` or `1`.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(default)]
pub struct HospitalTime {
    pub sat: Option<String>,
    pub sun: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub holiday: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub night: u8,
}

impl HospitalTime {
    #[must_use]
    pub const fn open_on_holidays(&self) -> bool {
        self.holiday == 1
    }

    #[must_use]
    pub const fn open_at_night(&self) -> bool {
        self.night == 1
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    KeyWord,
    Filter,
}

/// Navigation payload handed over to the search result page.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct SearchRequest {
    #[serde(rename = "type")]
    pub search_type: SearchType,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
}

/// Criteria of the area search by department and opening hours.
///
/// A value of `0` disables the criterion. `part` is the department code,
/// the other fields are flags.
#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(default)]
pub struct SearchFilter {
    pub part    : u32,
    pub sat     : u8,
    pub sun     : u8,
    pub holiday : u8,
    pub night   : u8,
}

impl SearchFilter {
    /// The enabled criteria as query parameters.
    pub fn criteria(&self) -> impl Iterator<Item = (&'static str, u32)> {
        let Self {
            part,
            sat,
            sun,
            holiday,
            night,
        } = *self;
        [
            ("part", part),
            ("sat", sat.into()),
            ("sun", sun.into()),
            ("holiday", holiday.into()),
            ("night", night.into()),
        ]
        .into_iter()
        .filter(|(_, value)| *value != 0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.criteria().next().is_none()
    }
}

/// Query parameters restricting a search to an area.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct SearchArea {
    pub e : f64,
    pub w : f64,
    pub s : f64,
    pub n : f64,
}

/// Error response of the hospital service.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message} (HTTP {http_status})"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
