/// Header carrying the API key for both upstream services.
pub const API_KEY_HEADER: &str = "apikey";

/// Default header set by the authenticating proxy with the signed-in user's NHS number.
pub const DEFAULT_NHS_NUMBER_HEADER: &str = "x-nhs-number";

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "VACC";
