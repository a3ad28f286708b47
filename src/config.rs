/// Configuration constants for the Heroku Platform API
pub mod api {
    /// Default API endpoint
    pub const BASE_URL: &str = "https://api.heroku.com";

    /// Accept header selecting API version 3
    pub const ACCEPT: &str = "application/vnd.heroku+json; version=3";

    /// Maximum page size accepted by the `Range` header
    pub const PAGE_SIZE: u32 = 1000;

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Apps endpoint
    pub const APPS: &str = "apps";

    /// Dynos sub-resource of an app
    pub const DYNOS: &str = "dynos";

    /// Add-ons sub-resource of an app
    pub const ADDONS: &str = "addons";

    /// Dyno sizes endpoint
    pub const DYNO_SIZES: &str = "dyno-sizes";

    /// Teams endpoint
    pub const TEAMS: &str = "teams";

    /// Spaces endpoint
    pub const SPACES: &str = "spaces";

    /// NAT sub-resource of a space
    pub const NAT: &str = "nat";

    /// Remaining request budget for the account
    pub const RATE_LIMITS: &str = "account/rate-limits";
}

/// Throughput limits for aggregation passes
pub mod limits {
    /// Heroku enforces an undocumented per-second ceiling; stay under it
    pub const REQUESTS_PER_SECOND: u32 = 40;

    /// Maximum number of in-flight tasks per fan-out level
    pub const MAX_CONCURRENT_TASKS: usize = 64;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Bearer token environment variable
    pub const TOKEN_ENV_VAR: &str = "HEROKU_AUTH_TOKEN";

    /// Basic auth username environment variable
    pub const USERNAME_ENV_VAR: &str = "HEROKU_USERNAME";

    /// Basic auth password environment variable
    pub const PASSWORD_ENV_VAR: &str = "HEROKU_PASSWORD";

    /// `.netrc` machine entry written by `heroku login`
    pub const NETRC_MACHINE: &str = "api.heroku.com";

    /// `.netrc` file name (relative to HOME)
    pub const NETRC_FILE: &str = ".netrc";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default name of the exported IP list
    pub const IP_LIST_NAME: &str = "heroku-ips-listing";

    /// Default description of the exported IP list
    pub const IP_LIST_DESCRIPTION: &str = "ips from heroku spaces";

    /// Default IP list output file
    pub const IP_LIST_FILE: &str = "ips-listing.yml";

    /// Default price of one dyno unit
    pub const DYNO_UNIT_PRICE: u32 = 0;
}
