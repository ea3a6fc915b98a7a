use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey};
use jwt_auth::util::{parse_jwt_algorithms, parse_jwt_key};
use std::{net::SocketAddr, path::PathBuf, time::Duration};

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub bind_address: SocketAddr,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_http_content_len: usize,

    /// Algorithms must belong to the same family
    pub jwt_algorithms: Vec<Algorithm>,
    pub jwt_key: DecodingKey,
    pub jwt_audience: Option<String>,
    pub jwt_issuer: Option<String>,

    pub fcm_base_url: String,
    pub fcm_service_account_file: PathBuf,
    pub fcm_request_timeout: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("WTW_NOTIFIER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("WTW_NOTIFIER_LOG_FILENAME")?;
        let bind_address = Self::env_var("WTW_NOTIFIER_BIND_ADDRESS")?.parse()?;
        let db_connection_string = Self::env_var("WTW_NOTIFIER_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("WTW_NOTIFIER_DB_NAME")?;
        let max_http_content_len = Self::env_var("WTW_NOTIFIER_MAX_HTTP_CONTENT_LEN")?.parse()?;
        let jwt_algorithms = parse_jwt_algorithms(&Self::env_var("WTW_NOTIFIER_JWT_ALGORITHMS")?)?;
        let jwt_algorithm = jwt_algorithms.first().ok_or(anyhow!(
            "WTW_NOTIFIER_JWT_ALGORITHMS need to contain at least one algorithm"
        ))?;
        let jwt_key = parse_jwt_key(jwt_algorithm, &Self::env_var("WTW_NOTIFIER_JWT_KEY")?)?;
        let jwt_audience = Self::optional_env_var("WTW_NOTIFIER_JWT_AUDIENCE");
        let jwt_issuer = Self::optional_env_var("WTW_NOTIFIER_JWT_ISSUER");
        let fcm_base_url = Self::env_var("WTW_NOTIFIER_FCM_BASE_URL")?;
        let fcm_service_account_file =
            Self::env_var("WTW_NOTIFIER_FCM_SERVICE_ACCOUNT_FILE")?.into();
        let fcm_request_timeout = Self::env_var("WTW_NOTIFIER_FCM_REQUEST_TIMEOUT")?.parse()?;
        let fcm_request_timeout = Duration::from_secs(fcm_request_timeout);

        Ok(Self {
            log_directory,
            log_filename,
            bind_address,
            db_connection_string,
            db_name,
            max_http_content_len,
            jwt_algorithms,
            jwt_key,
            jwt_audience,
            jwt_issuer,
            fcm_base_url,
            fcm_service_account_file,
            fcm_request_timeout,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use serial_test::serial;

    pub const TEST_JWT_ALGORITHMS: &str = "HS256";
    pub const TEST_JWT_KEY: &str = "some secret";

    pub fn set_test_env_vars() {
        let vars = [
            ("WTW_NOTIFIER_LOG_DIRECTORY", "logs"),
            ("WTW_NOTIFIER_LOG_FILENAME", "wtw-notifier.log"),
            ("WTW_NOTIFIER_BIND_ADDRESS", "127.0.0.1:8080"),
            (
                "WTW_NOTIFIER_DB_CONNECTION_STRING",
                "mongodb://localhost:27017",
            ),
            ("WTW_NOTIFIER_DB_NAME", "wtw"),
            ("WTW_NOTIFIER_MAX_HTTP_CONTENT_LEN", "4096"),
            ("WTW_NOTIFIER_JWT_ALGORITHMS", TEST_JWT_ALGORITHMS),
            ("WTW_NOTIFIER_JWT_KEY", TEST_JWT_KEY),
            ("WTW_NOTIFIER_FCM_BASE_URL", "http://127.0.0.1:9099"),
            (
                "WTW_NOTIFIER_FCM_SERVICE_ACCOUNT_FILE",
                concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/tests/fixtures/service_account_key.json"
                ),
            ),
            ("WTW_NOTIFIER_FCM_REQUEST_TIMEOUT", "10"),
        ];
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        std::env::remove_var("WTW_NOTIFIER_JWT_AUDIENCE");
        std::env::remove_var("WTW_NOTIFIER_JWT_ISSUER");
    }

    #[test]
    #[serial]
    fn parse_all_variables_set() {
        set_test_env_vars();
        std::env::set_var("WTW_NOTIFIER_JWT_AUDIENCE", "wtw-app");

        let env = ApplicationEnv::parse().unwrap();

        assert_eq!(env.bind_address, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(env.max_http_content_len, 4096);
        assert_eq!(env.jwt_algorithms, vec![Algorithm::HS256]);
        assert_eq!(env.jwt_audience.as_deref(), Some("wtw-app"));
        assert_eq!(env.jwt_issuer, None);
        assert_eq!(env.fcm_request_timeout, Duration::from_secs(10));

        std::env::remove_var("WTW_NOTIFIER_JWT_AUDIENCE");
    }

    #[test]
    #[serial]
    fn parse_missing_variable() {
        set_test_env_vars();
        std::env::remove_var("WTW_NOTIFIER_DB_NAME");

        let err = ApplicationEnv::parse().err().unwrap();

        assert_eq!(
            err.to_string(),
            "environment variable WTW_NOTIFIER_DB_NAME not set"
        );
    }

    #[test]
    #[serial]
    fn parse_invalid_bind_address() {
        set_test_env_vars();
        std::env::set_var("WTW_NOTIFIER_BIND_ADDRESS", "not an address");

        let result = ApplicationEnv::parse();

        assert!(result.is_err());
    }
}
