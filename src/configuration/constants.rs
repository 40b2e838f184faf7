pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod common {
    /// Prefix of environment variables overriding the settings file.
    pub const ENV_PREFIX: &'static str = "VERDICT";
}
