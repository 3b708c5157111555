use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use anyhow::{anyhow, ensure};
use url::Url;
use wintoast::{Action, Audio, Duration, Notification};

use crate::Args;

pub const APP_ID_ENV: &str = "WINTOAST_APP_ID";

impl Args {
    pub fn notification(&self) -> anyhow::Result<Notification> {
        let mut notification = Notification::new()
            .app_id(app_id(self.app_id.as_deref()))
            .title(&self.title)
            .message(self.message.as_deref().unwrap_or_default())
            .attribution(self.attribution.as_deref().unwrap_or_default())
            .activation_arguments(self.launch.as_deref().unwrap_or_default())
            .loop_audio(self.r#loop)
            .hint_crop_circle(self.circle);

        notification.activation_type = self.activation_type;
        notification.scenario = self.scenario;
        notification.audio = self.audio;

        if plays_once(self.audio, self.r#loop) {
            log::warn!("Looping sound cues are usually combined with --loop");
        }

        if self.long {
            notification = notification.duration(Duration::Long);
        }

        if let Some(ref icon) = self.icon {
            notification = notification.icon(image_uri(icon).context("Invalid --icon")?);
        }

        if let Some(ref hero) = self.hero {
            notification = notification.hero(image_uri(hero).context("Invalid --hero")?);
        }

        if let Some(ref image) = self.image {
            notification = notification.inline_image(image_uri(image).context("Invalid --image")?);
        }

        for action in &self.action {
            notification = notification.action(parse_action(action)?);
        }

        Ok(notification)
    }
}

/// A `Looping.*` cue without the loop flag only plays once.
fn plays_once(audio: Option<Audio>, looped: bool) -> bool {
    !looped && audio.is_some_and(Audio::is_looping)
}

fn app_id(arg: Option<&str>) -> String {
    if let Some(app_id) = arg {
        app_id.to_owned()
    } else if let Ok(app_id) = env::var(APP_ID_ENV) {
        app_id
    } else {
        log::debug!("No app id given, the toast is shown as a generic app");
        String::new()
    }
}

/// Accepts a URI as-is, or turns a local path into a `file:///` URI.
pub fn image_uri(value: &str) -> anyhow::Result<String> {
    // Single letter schemes are Windows drive letters, not URIs.
    if let Ok(url) = Url::parse(value)
        && url.scheme().len() > 1
    {
        return Ok(url.into());
    }

    let expanded = shellexpand::tilde(value);
    let path = absolute(Path::new(expanded.as_ref()))?;

    Url::from_file_path(&path)
        .map(String::from)
        .map_err(|()| anyhow!("Cannot turn '{}' into a file URI", path.display()))
}

fn absolute(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let cwd = env::current_dir().context("Failed to read the current directory")?;
    Ok(cwd.join(path))
}

/// Parses `content|arguments[|activationType]`.
pub fn parse_action(value: &str) -> anyhow::Result<Action> {
    let mut parts = value.split('|');

    let content = parts
        .next()
        .filter(|x| !x.is_empty())
        .ok_or_else(|| anyhow!("Missing content in action '{value}'"))?;

    let arguments = parts
        .next()
        .ok_or_else(|| anyhow!("Missing arguments in action '{value}'"))?;

    let mut action = Action::new(content, arguments);

    if let Some(activation_type) = parts.next() {
        let activation_type = activation_type
            .parse()
            .with_context(|| format!("Invalid action '{value}'"))?;
        action = action.activation_type(activation_type);
    }

    ensure!(
        parts.next().is_none(),
        "Too many fields in action '{}', expected content|arguments[|activationType]",
        value
    );

    Ok(action)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wintoast::ActivationType;

    use super::*;

    #[test]
    fn uris_pass_through() {
        assert_eq!(
            image_uri("https://example.com/hero.png").unwrap(),
            "https://example.com/hero.png"
        );
        assert_eq!(
            image_uri("ms-appx:///Assets/logo.png").unwrap(),
            "ms-appx:///Assets/logo.png"
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_become_file_uris() {
        assert_eq!(
            image_uri("/usr/share/icons/build ok.png").unwrap(),
            "file:///usr/share/icons/build%20ok.png"
        );
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let uri = image_uri("icon.png").unwrap();
        let expected = Url::from_file_path(env::current_dir().unwrap().join("icon.png")).unwrap();

        assert_eq!(uri, expected.as_str());
    }

    #[test]
    fn looping_cue_without_loop_flag() {
        assert!(plays_once(Some(Audio::LoopingAlarm2), false));
        assert!(!plays_once(Some(Audio::LoopingAlarm2), true));
        assert!(!plays_once(Some(Audio::Mail), false));
        assert!(!plays_once(None, false));
    }

    #[test]
    fn action_with_defaults() {
        assert_eq!(
            parse_action("Open|app:open").unwrap(),
            Action::new("Open", "app:open")
        );
    }

    #[test]
    fn action_with_activation_type() {
        assert_eq!(
            parse_action("Snooze|snooze|background").unwrap(),
            Action::new("Snooze", "snooze").activation_type(ActivationType::Background)
        );
    }

    #[test]
    fn action_allows_empty_arguments() {
        assert_eq!(parse_action("Ok|").unwrap(), Action::new("Ok", ""));
    }

    #[test]
    fn malformed_actions_are_rejected() {
        assert!(parse_action("").is_err());
        assert!(parse_action("Open").is_err());
        assert!(parse_action("|open").is_err());
        assert!(parse_action("Open|open|sideways").is_err());
        assert!(parse_action("Open|open|system|extra").is_err());
    }
}
