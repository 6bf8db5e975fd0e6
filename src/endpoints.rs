//! API endpoint URL construction

/// Endpoint builder
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Create a new endpoints builder
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the full URL for a path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Session
    pub fn login(&self) -> String {
        self.url("/auth/v1/login")
    }

    // Devices
    pub fn list_devices(&self) -> String {
        self.url("/public/v1/getDevices")
    }

    pub fn remove_devices(&self) -> String {
        self.url("/public/v1/removeDevices")
    }

    // Device secrets
    pub fn get_otp(&self) -> String {
        self.url("/public/v1/getOtp")
    }

    pub fn get_passwords(&self) -> String {
        self.url("/public/v1/getPasswords")
    }

    // DLP dictionaries
    pub fn dlp_dicts(&self) -> String {
        self.url("/dlpDictionaries")
    }

    pub fn dlp_dict(&self, dict_id: i64) -> String {
        self.url(&format!("/dlpDictionaries/{}", dict_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let endpoints = Endpoints::new("https://api.example.com/papi");

        assert_eq!(
            endpoints.login(),
            "https://api.example.com/papi/auth/v1/login"
        );
        assert_eq!(
            endpoints.list_devices(),
            "https://api.example.com/papi/public/v1/getDevices"
        );
        assert_eq!(
            endpoints.dlp_dict(42),
            "https://api.example.com/papi/dlpDictionaries/42"
        );
    }

    #[test]
    fn test_trailing_slash() {
        let endpoints = Endpoints::new("https://api.example.com/");
        assert_eq!(endpoints.dlp_dicts(), "https://api.example.com/dlpDictionaries");
    }
}
