mod conf;
mod controller;
mod input;
mod model;
mod provider;
mod service;

use anyhow::{bail, Result};
use conf::Conf;
use controller::{Controller, InfoWindow, StatusBar};
use model::Status;
use provider::OpenErApi;
use service::{RateStatus, Refresh};
use std::{
    env,
    io::{stdout, Write},
    process::exit,
    sync::Arc,
};
use tokio::{
    io::{stdin, BufReader},
    sync::mpsc,
};
use tracing::{error, info, Subscriber};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "usdbar=info";

#[derive(Debug, PartialEq)]
enum Mode {
    Run,
    Once,
}

#[tokio::main]
async fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();

    let res = match mode(&args) {
        Ok(Mode::Run) => run().await.map(|_| 0),
        Ok(Mode::Once) => once().await,
        Err(e) => Err(e),
    };

    match res {
        Ok(0) => {}
        Ok(code) => exit(code),
        Err(e) => {
            error!(%e, "Exiting");
            exit(1);
        }
    }
}

fn mode(args: &[String]) -> Result<Mode> {
    match args {
        [] => Ok(Mode::Run),
        [arg] if arg == "once" => Ok(Mode::Once),
        _ => bail!("Unknown argument {:?}", args),
    }
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn subscriber() -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .finish()
}

fn init_logging() {
    subscriber().init();
}

async fn run() -> Result<()> {
    let conf = Conf::new()?;
    info!(url = %conf.provider.url, currency = %conf.provider.currency, "Loaded config");

    let controllers: Vec<Box<dyn Controller>> = vec![
        Box::new(StatusBar::new(Box::new(stdout()))),
        Box::new(InfoWindow::new(
            conf.refresh.interval(),
            &conf.provider.url,
            Box::new(stdout()),
        )),
    ];

    let refresh = Refresh::new(
        Arc::new(OpenErApi::new(conf.provider)?),
        RateStatus::new(controllers),
        conf.refresh.interval(),
    );

    let (commands, rx) = mpsc::channel(16);
    let refresh = tokio::spawn(refresh.run(rx));

    input::read_commands(BufReader::new(stdin()), &commands).await?;

    drop(commands);
    refresh.await?;

    Ok(())
}

async fn once() -> Result<i32> {
    let conf = Conf::new()?;
    let refresh = Refresh::new(
        Arc::new(OpenErApi::new(conf.provider)?),
        RateStatus::new(vec![]),
        conf.refresh.interval(),
    );

    print_once(refresh, &mut stdout()).await
}

/// Prints the status bar title of a single fetch. Exit code is 0 only on success.
async fn print_once(refresh: Refresh, out: &mut dyn Write) -> Result<i32> {
    let status = refresh.once().await;
    writeln!(out, "{}", controller::title(&status))?;

    Ok(match status {
        Status::Success { .. } => 0,
        _ => 1,
    })
}

#[cfg(test)]
mod tests {
    use super::{log_filter, mode, print_once, subscriber, Mode, DEFAULT_LOG_FILTER};
    use crate::{
        model::FetchError,
        service::{RateStatus, Refresh},
        test::{SharedBuf, Scripted},
    };
    use anyhow::Result;
    use std::{sync::Arc, time::Duration};
    use tracing_subscriber::EnvFilter;

    #[test]
    fn modes() -> Result<()> {
        assert_eq!(Mode::Run, mode(&[])?);
        assert_eq!(Mode::Once, mode(&["once".to_string()])?);
        assert!(mode(&["twice".to_string()]).is_err());
        assert!(mode(&["once".to_string(), "more".to_string()]).is_err());
        Ok(())
    }

    #[test]
    fn log_filter_builds() -> Result<()> {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER)?;
        assert!(filter.to_string().contains("usdbar"));
        log_filter();
        Ok(())
    }

    #[test]
    fn subscriber_logs() {
        tracing::subscriber::with_default(subscriber(), || {
            tracing::info!(rate = 5.23, "Got exchange rate");
        });
    }

    fn refresh(result: Result<f64, FetchError>) -> Refresh {
        Refresh::new(
            Arc::new(Scripted::new(vec![(Duration::from_secs(0), result)])),
            RateStatus::new(vec![]),
            Duration::from_secs(60),
        )
    }

    #[tokio::test]
    async fn once_prints_rate() -> Result<()> {
        let mut out = SharedBuf::default();
        assert_eq!(0, print_once(refresh(Ok(5.2345)), &mut out).await?);
        assert_eq!("USD $ 5.23\n", out.contents());
        Ok(())
    }

    #[tokio::test]
    async fn once_fails_on_error() -> Result<()> {
        let mut out = SharedBuf::default();
        let code = print_once(refresh(Err(FetchError::NoData)), &mut out).await?;
        assert_eq!(1, code);
        assert_eq!("USD ⚠️\n", out.contents());
        Ok(())
    }
}
