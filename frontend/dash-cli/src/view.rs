use crate::{CliError, CliResult, ViewCommand, write_json};

use dash_config::Config;
use dash_embed::{
    DisplayState, EmbeddedFrame, HeadlessContainer, IframeEmbedder, MountTarget, SessionOutcome,
    UserSwitchController, Viewport,
};

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::watch;

/// What one stdin command left on the page.
#[derive(Debug, Serialize)]
pub(crate) struct ViewSnapshot {
    pub(crate) display: DisplayState,
    pub(crate) viewport: Viewport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) outcome: Option<SessionOutcome>,
    pub(crate) frame: Option<FrameSnapshot>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FrameSnapshot {
    pub(crate) src: String,
    pub(crate) style: String,
    pub(crate) token_preview: String,
}

impl From<EmbeddedFrame> for FrameSnapshot {
    fn from(frame: EmbeddedFrame) -> Self {
        Self {
            src: frame.src,
            style: frame.style.to_css(),
            token_preview: frame.guest_token.preview(),
        }
    }
}

/// Attach the view, then apply stdin commands until `quit` or end of input.
pub async fn run_view(config: &Config, user: Option<&str>, pretty: bool) -> CliResult<()> {
    let input = BufReader::new(tokio::io::stdin());
    drive_view(config, user, pretty, input, &mut std::io::stdout()).await
}

/// Attach the view, then apply one command per `input` line until `quit` or
/// end of input, writing a snapshot to `out` after each.
///
/// Lines that do not parse are reported and skipped.
pub async fn drive_view<R, W>(
    config: &Config,
    user: Option<&str>,
    pretty: bool,
    input: R,
    out: &mut W,
) -> CliResult<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let container = Arc::new(HeadlessContainer::new(&config.dashboard.container_id));
    let (viewport, viewport_rx) = watch::channel(Viewport::new(
        config.resize.viewport_width,
        config.resize.viewport_height,
    ));
    let controller = UserSwitchController::from_config(
        config,
        Arc::new(IframeEmbedder::new()),
        container.clone(),
        viewport_rx,
    );
    let settle = Duration::from_millis(config.resize.interval_ms);

    if let Some(user) = user {
        controller.select_user(user);
    }
    let outcome = controller.attach().await;
    write_json(
        out,
        &snapshot(&controller, &container, &viewport, Some(outcome)),
        pretty,
    )?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.map_err(CliError::io)? {
        let command = match ViewCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("Ignoring input line {line:?}: {e}");
                eprintln!("{e}");
                continue;
            }
        };

        let outcome = match command {
            ViewCommand::Select(user) => {
                controller.select_user(&user);
                None
            }
            ViewCommand::Reload => Some(controller.reload().await),
            ViewCommand::Resize(size) => {
                viewport.send_replace(size);
                // Give the tracking loop one tick to restyle the frame.
                tokio::time::sleep(settle).await;
                None
            }
            ViewCommand::Status => None,
            ViewCommand::Quit => break,
        };

        write_json(
            out,
            &snapshot(&controller, &container, &viewport, outcome),
            pretty,
        )?;
    }

    controller.teardown().await;
    info!("View closed");
    Ok(())
}

pub(crate) fn snapshot(
    controller: &UserSwitchController,
    container: &HeadlessContainer,
    viewport: &watch::Sender<Viewport>,
    outcome: Option<SessionOutcome>,
) -> ViewSnapshot {
    ViewSnapshot {
        display: controller.display(),
        viewport: *viewport.borrow(),
        outcome,
        frame: container.frame().map(FrameSnapshot::from),
    }
}
