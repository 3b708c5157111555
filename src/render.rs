//! Turns a [`Notification`] into toast XML and the PowerShell script that
//! shows it.
//!
//! Unset options render as their defaults, and every optional element is
//! left out entirely when its source value is empty.

use core::fmt::Write as _;
use std::borrow::Cow;

use crate::error::RenderError;
use crate::toast::{Audio, Notification, Scenario};

/// Bound as the notifier id when the request carries none.
pub const FALLBACK_APP_ID: &str = "Windows App";

const PREAMBLE: &str = "\
[Windows.UI.Notifications.ToastNotificationManager, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.UI.Notifications.ToastNotification, Windows.UI.Notifications, ContentType = WindowsRuntime] | Out-Null
[Windows.Data.Xml.Dom.XmlDocument, Windows.Data.Xml.Dom.XmlDocument, ContentType = WindowsRuntime] | Out-Null
";

const TRAILER: &str = "\
$xml = New-Object Windows.Data.Xml.Dom.XmlDocument
$xml.LoadXml($template)
$toast = New-Object Windows.UI.Notifications.ToastNotification $xml
[Windows.UI.Notifications.ToastNotificationManager]::CreateToastNotifier($APP_ID).Show($toast)
";

/// The full PowerShell script: WinRT type loading, app id binding, the toast
/// XML in an expandable here-string, and the call that shows it.
///
/// # Errors
///
/// Returns [`RenderError`] if the formatter fails. Field contents are never
/// rejected.
pub fn script(notification: &Notification) -> Result<String, RenderError> {
    let app_id = if notification.app_id.is_empty() {
        FALLBACK_APP_ID
    } else {
        &notification.app_id
    };

    let mut out = String::new();
    out.push_str(PREAMBLE);
    writeln!(out)?;
    writeln!(out, "$APP_ID = '{}'", single_quoted(app_id))?;
    writeln!(out)?;
    writeln!(out, "$template = @\"")?;
    write_toast(&mut out, notification, here_string)?;
    writeln!(out, "\"@")?;
    out.push_str(TRAILER);

    Ok(out)
}

/// Just the toast XML, as PowerShell sees it after expanding the here-string.
///
/// # Errors
///
/// Returns [`RenderError`] if the formatter fails.
pub fn toast_xml(notification: &Notification) -> Result<String, RenderError> {
    let mut out = String::new();
    write_toast(&mut out, notification, Cow::Borrowed)?;
    Ok(out)
}

/// Only a non-default scenario adds a `scenario` attribute to `<toast>`, so
/// default payloads keep the classic attribute set.
fn write_toast<'a>(
    out: &mut String,
    n: &'a Notification,
    quote: fn(&'a str) -> Cow<'a, str>,
) -> core::fmt::Result {
    write!(
        out,
        "<toast activationType=\"{}\" launch=\"{}\" duration=\"{}\"",
        n.activation_type.unwrap_or_default(),
        quote(&n.activation_arguments),
        n.duration.unwrap_or_default(),
    )?;
    match n.scenario.unwrap_or_default() {
        Scenario::Default => {}
        scenario => write!(out, " scenario=\"{scenario}\"")?,
    }
    writeln!(out, ">")?;

    writeln!(out, "    <visual>")?;
    writeln!(out, "        <binding template=\"ToastGeneric\">")?;

    if !n.icon.is_empty() {
        let crop = if n.hint_crop_circle {
            " hint-crop=\"circle\""
        } else {
            ""
        };
        writeln!(
            out,
            "            <image placement=\"appLogoOverride\"{crop} src=\"{}\" />",
            quote(&n.icon)
        )?;
    }
    if !n.hero.is_empty() {
        writeln!(
            out,
            "            <image placement=\"hero\" src=\"{}\" />",
            quote(&n.hero)
        )?;
    }
    if !n.inline_image.is_empty() {
        writeln!(out, "            <image src=\"{}\" />", quote(&n.inline_image))?;
    }
    for text in [&n.title, &n.message, &n.attribution] {
        if !text.is_empty() {
            writeln!(out, "            <text><![CDATA[{}]]></text>", quote(text))?;
        }
    }

    writeln!(out, "        </binding>")?;
    writeln!(out, "    </visual>")?;

    match n.audio.unwrap_or_default() {
        Audio::Silent => writeln!(out, "    <audio silent=\"true\" />")?,
        cue => writeln!(out, "    <audio src=\"{cue}\" loop=\"{}\" />", n.loop_audio)?,
    }

    if !n.actions.is_empty() {
        writeln!(out, "    <actions>")?;
        for action in &n.actions {
            write!(
                out,
                "        <action activationType=\"{}\" content=\"{}\" arguments=\"{}\"",
                action.activation_type,
                quote(&action.content),
                quote(&action.arguments),
            )?;
            if !action.image_uri.is_empty() {
                write!(out, " imageUri=\"{}\"", quote(&action.image_uri))?;
            }
            writeln!(out, " />")?;
        }
        writeln!(out, "    </actions>")?;
    }

    writeln!(out, "</toast>")
}

/// PowerShell reads these as `"` too.
const DOUBLE_QUOTES: [char; 4] = ['"', '\u{201C}', '\u{201D}', '\u{201E}'];

/// PowerShell reads these as `'` too.
const SINGLE_QUOTES: [char; 5] = ['\'', '\u{2018}', '\u{2019}', '\u{201A}', '\u{201B}'];

/// Keeps `@" "@` from expanding variables or ending early.
fn here_string(value: &str) -> Cow<'_, str> {
    let special = |c: char| c == '`' || c == '$' || DOUBLE_QUOTES.contains(&c);
    if !value.contains(special) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        if special(c) {
            escaped.push('`');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Doubles every quote that would end a `'...'` literal.
fn single_quoted(value: &str) -> Cow<'_, str> {
    if !value.contains(SINGLE_QUOTES) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if SINGLE_QUOTES.contains(&c) {
            escaped.push(c);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
