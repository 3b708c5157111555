use core::fmt;
use core::str::FromStr;

use crate::dispatch::{Interpreter, PowerShell};
use crate::error::{Error, ParseEnumError};
use crate::render;

/// Declares a closed option set with its wire string and a short CLI name.
macro_rules! option_set {
    (
        $(#[$meta:meta])*
        $kind:literal => $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal, $short:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The value written into the toast XML.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Short kebab-case name accepted on the command line.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $short, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|x| x.as_str() == s || x.name().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseEnumError {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

option_set! {
    /// How the shell routes a click on the toast or one of its buttons.
    "activation type" => ActivationType {
        Foreground = "foreground", "foreground";
        Background = "background", "background";
        #[default]
        Protocol = "protocol", "protocol";
        System = "system", "system";
    }
}

option_set! {
    /// Urgency hint. Alarms and calls stay on screen and loop their audio.
    "scenario" => Scenario {
        #[default]
        Default = "default", "default";
        Alarm = "alarm", "alarm";
        Reminder = "reminder", "reminder";
        IncomingCall = "incomingCall", "incoming-call";
    }
}

option_set! {
    "duration" => Duration {
        #[default]
        Short = "short", "short";
        Long = "long", "long";
    }
}

option_set! {
    /// System sound played with the toast.
    "audio cue" => Audio {
        Default = "ms-winsoundevent:Notification.Default", "default";
        Im = "ms-winsoundevent:Notification.IM", "im";
        Mail = "ms-winsoundevent:Notification.Mail", "mail";
        Reminder = "ms-winsoundevent:Notification.Reminder", "reminder";
        Sms = "ms-winsoundevent:Notification.SMS", "sms";
        LoopingAlarm = "ms-winsoundevent:Notification.Looping.Alarm", "looping-alarm";
        LoopingAlarm2 = "ms-winsoundevent:Notification.Looping.Alarm2", "looping-alarm2";
        LoopingAlarm3 = "ms-winsoundevent:Notification.Looping.Alarm3", "looping-alarm3";
        LoopingAlarm4 = "ms-winsoundevent:Notification.Looping.Alarm4", "looping-alarm4";
        LoopingAlarm5 = "ms-winsoundevent:Notification.Looping.Alarm5", "looping-alarm5";
        LoopingAlarm6 = "ms-winsoundevent:Notification.Looping.Alarm6", "looping-alarm6";
        LoopingAlarm7 = "ms-winsoundevent:Notification.Looping.Alarm7", "looping-alarm7";
        LoopingAlarm8 = "ms-winsoundevent:Notification.Looping.Alarm8", "looping-alarm8";
        LoopingAlarm9 = "ms-winsoundevent:Notification.Looping.Alarm9", "looping-alarm9";
        LoopingAlarm10 = "ms-winsoundevent:Notification.Looping.Alarm10", "looping-alarm10";
        LoopingCall = "ms-winsoundevent:Notification.Looping.Call", "looping-call";
        LoopingCall2 = "ms-winsoundevent:Notification.Looping.Call2", "looping-call2";
        LoopingCall3 = "ms-winsoundevent:Notification.Looping.Call3", "looping-call3";
        LoopingCall4 = "ms-winsoundevent:Notification.Looping.Call4", "looping-call4";
        LoopingCall5 = "ms-winsoundevent:Notification.Looping.Call5", "looping-call5";
        LoopingCall6 = "ms-winsoundevent:Notification.Looping.Call6", "looping-call6";
        LoopingCall7 = "ms-winsoundevent:Notification.Looping.Call7", "looping-call7";
        LoopingCall8 = "ms-winsoundevent:Notification.Looping.Call8", "looping-call8";
        LoopingCall9 = "ms-winsoundevent:Notification.Looping.Call9", "looping-call9";
        LoopingCall10 = "ms-winsoundevent:Notification.Looping.Call10", "looping-call10";
        #[default]
        Silent = "silent", "silent";
    }
}

impl Audio {
    /// Cues from the `Notification.Looping.*` family, meant for alarm and
    /// call scenarios.
    #[must_use]
    pub const fn is_looping(self) -> bool {
        matches!(
            self,
            Self::LoopingAlarm
                | Self::LoopingAlarm2
                | Self::LoopingAlarm3
                | Self::LoopingAlarm4
                | Self::LoopingAlarm5
                | Self::LoopingAlarm6
                | Self::LoopingAlarm7
                | Self::LoopingAlarm8
                | Self::LoopingAlarm9
                | Self::LoopingAlarm10
                | Self::LoopingCall
                | Self::LoopingCall2
                | Self::LoopingCall3
                | Self::LoopingCall4
                | Self::LoopingCall5
                | Self::LoopingCall6
                | Self::LoopingCall7
                | Self::LoopingCall8
                | Self::LoopingCall9
                | Self::LoopingCall10
        )
    }
}

/// A button on the toast.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Action {
    pub activation_type: ActivationType,
    pub content: String,
    pub arguments: String,
    pub image_uri: String,
}

impl Action {
    #[must_use]
    pub fn new(content: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            arguments: arguments.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn activation_type(mut self, activation_type: ActivationType) -> Self {
        self.activation_type = activation_type;
        self
    }

    #[must_use]
    pub fn image_uri(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = uri.into();
        self
    }
}

/// A toast request. Empty strings and `None` mean "not set".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Notification {
    pub app_id: String,
    pub title: String,
    pub message: String,
    pub attribution: String,
    pub icon: String,
    pub hero: String,
    pub inline_image: String,
    pub activation_type: Option<ActivationType>,
    pub scenario: Option<Scenario>,
    pub activation_arguments: String,
    pub actions: Vec<Action>,
    pub audio: Option<Audio>,
    pub loop_audio: bool,
    pub duration: Option<Duration>,
    pub hint_crop_circle: bool,
}

impl Notification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every unset option with its default. Set options are left alone.
    pub fn apply_defaults(&mut self) {
        self.activation_type.get_or_insert_default();
        self.scenario.get_or_insert_default();
        self.audio.get_or_insert_default();
        self.duration.get_or_insert_default();
    }

    /// Renders and shows the toast through PowerShell, blocking until the
    /// interpreter exits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the script cannot be rendered and
    /// [`Error::Dispatch`] if PowerShell cannot be launched or fails.
    pub fn send(self) -> Result<(), Error> {
        self.send_with(&PowerShell::default())
    }

    /// Like [`send`](Self::send), with any [`Interpreter`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the script cannot be rendered, otherwise
    /// whatever the interpreter reports as [`Error::Dispatch`].
    pub fn send_with(mut self, interpreter: &dyn Interpreter) -> Result<(), Error> {
        self.apply_defaults();
        let script = render::script(&self)?;
        log::debug!("Toast script:\n{script}");
        interpreter.run(&script)?;
        Ok(())
    }

    #[must_use]
    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = app_id.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    #[must_use]
    pub fn icon(mut self, uri: impl Into<String>) -> Self {
        self.icon = uri.into();
        self
    }

    #[must_use]
    pub fn hero(mut self, uri: impl Into<String>) -> Self {
        self.hero = uri.into();
        self
    }

    #[must_use]
    pub fn inline_image(mut self, uri: impl Into<String>) -> Self {
        self.inline_image = uri.into();
        self
    }

    #[must_use]
    pub fn activation_type(mut self, activation_type: ActivationType) -> Self {
        self.activation_type = Some(activation_type);
        self
    }

    #[must_use]
    pub fn scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    #[must_use]
    pub fn activation_arguments(mut self, arguments: impl Into<String>) -> Self {
        self.activation_arguments = arguments.into();
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn audio(mut self, audio: Audio) -> Self {
        self.audio = Some(audio);
        self
    }

    #[must_use]
    pub fn loop_audio(mut self, loop_audio: bool) -> Self {
        self.loop_audio = loop_audio;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn hint_crop_circle(mut self, circle: bool) -> Self {
        self.hint_crop_circle = circle;
        self
    }
}
