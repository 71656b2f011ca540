use crate::provider::OpenErApiConf;
use anyhow::{bail, Result};
use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::{env, include_bytes, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize)]
pub struct Conf {
    pub provider: OpenErApiConf,
    pub refresh: RefreshConf,
}

#[derive(Debug, Deserialize)]
pub struct RefreshConf {
    pub interval_secs: u64,
}

impl RefreshConf {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

impl Conf {
    pub fn new() -> Result<Conf> {
        let explicit = env::var_os("USDBAR_CONF").map(PathBuf::from);
        Conf::load(user_conf_path(), explicit)
    }

    /// The user file is optional, an explicitly requested one must exist.
    fn load(user: Option<PathBuf>, explicit: Option<PathBuf>) -> Result<Conf> {
        let mut figment = Figment::new().merge(Toml::string(&default_conf()));

        if let Some(path) = user {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            if !path.is_file() {
                bail!("config file {} does not exist", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }

        Conf::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Conf> {
        let conf: Conf = figment.extract()?;

        if conf.refresh.interval_secs == 0 {
            bail!("refresh.interval_secs must be greater than zero");
        }

        Ok(conf)
    }
}

fn default_conf() -> String {
    let default_conf = include_bytes!("../usdbar.conf");
    String::from_utf8_lossy(default_conf).into_owned()
}

fn user_conf_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("usdbar").join("usdbar.conf"))
}

#[cfg(test)]
mod test {
    use super::{default_conf, Conf};
    use anyhow::Result;
    use figment::{
        providers::{Format, Toml},
        Figment,
    };
    use std::{env, fs, time::Duration};

    #[test]
    fn defaults() -> Result<()> {
        let conf = Conf::extract(Figment::new().merge(Toml::string(&default_conf())))?;
        assert_eq!("https://open.er-api.com/v6/latest/USD", conf.provider.url);
        assert_eq!("BRL", conf.provider.currency);
        assert_eq!(Duration::from_secs(2), conf.provider.delay());
        assert_eq!(Duration::from_secs(60), conf.refresh.interval());
        Ok(())
    }

    #[test]
    fn custom_overrides_defaults() -> Result<()> {
        let custom = "[refresh]\ninterval_secs = 15\n[provider]\ndelay_ms = 0\n";
        let figment = Figment::new()
            .merge(Toml::string(&default_conf()))
            .merge(Toml::string(custom));
        let conf = Conf::extract(figment)?;
        assert_eq!(Duration::from_secs(15), conf.refresh.interval());
        assert_eq!(Duration::from_secs(0), conf.provider.delay());
        assert_eq!("BRL", conf.provider.currency);
        Ok(())
    }

    #[test]
    fn missing_user_conf_is_ignored() -> Result<()> {
        let conf = Conf::load(Some(env::temp_dir().join("usdbar-missing-user.conf")), None)?;
        assert_eq!(Duration::from_secs(60), conf.refresh.interval());
        Ok(())
    }

    #[test]
    fn missing_explicit_conf_is_an_error() {
        let path = env::temp_dir().join("usdbar-missing-explicit.conf");
        let err = Conf::load(None, Some(path)).unwrap_err();
        assert!(err.to_string().contains("usdbar-missing-explicit.conf"));
    }

    #[test]
    fn explicit_conf_overrides_defaults() -> Result<()> {
        let path = env::temp_dir().join(format!("usdbar-explicit-{}.conf", std::process::id()));
        fs::write(&path, "[provider]\ncurrency = \"EUR\"\n")?;
        let conf = Conf::load(None, Some(path.clone()));
        fs::remove_file(&path)?;
        assert_eq!("EUR", conf?.provider.currency);
        Ok(())
    }

    #[test]
    fn zero_interval_is_rejected() {
        let figment = Figment::new()
            .merge(Toml::string(&default_conf()))
            .merge(Toml::string("[refresh]\ninterval_secs = 0\n"));
        assert!(Conf::extract(figment).is_err());
    }
}
