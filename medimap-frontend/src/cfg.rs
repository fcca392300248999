const DEFAULT_API_URL_HOSPITAL: &str = "/api/hospital";

#[derive(Debug, Clone)]
pub struct Cfg {
    pub api_url_hospital: String,
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            api_url_hospital: DEFAULT_API_URL_HOSPITAL.to_string(),
        }
    }
}

impl Cfg {
    /// Reads the variables that were set while building the app.
    pub fn from_build_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Some(url) = option_env!("MEDIMAP_API_URL_HOSPITAL") {
            cfg.api_url_hospital = url.trim_end_matches('/').to_string();
        }
        cfg
    }
}
