use crate::service::Command;
use anyhow::Result;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc::Sender,
};
use tracing::{info, warn};

/// Forwards user actions read line by line. Returns once quit was sent or input ends.
pub async fn read_commands<R>(input: R, commands: &Sender<Command>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse(&line) {
            Some(command) => command,
            None => {
                warn!(%line, "Unknown command, expected r(efetch), o(pen) or q(uit)");
                continue;
            }
        };

        if commands.send(command).await.is_err() || command == Command::Quit {
            return Ok(());
        }
    }

    info!("Input closed");
    Ok(())
}

pub fn parse(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "r" | "refetch" => Some(Command::Refetch),
        "o" | "open" => Some(Command::Open),
        "q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}
