use dioxus::prelude::*;

/// Color tone of [`Badge`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
}

impl BadgeTone {
    /// Parse a tone name, falling back to neutral.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            _ => Self::Neutral,
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::Neutral => "background-color: #f5f5f5; color: #404040;",
            Self::Success => "background-color: #dcfce7; color: #166534;",
            Self::Warning => "background-color: #fef9c3; color: #854d0e;",
            Self::Danger => "background-color: #fee2e2; color: #991b1b;",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    #[props(default)]
    pub tone: BadgeTone,
    pub children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let tone_style = props.tone.style();

    rsx! {
        span {
            style: "display: inline-block; padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; {tone_style}",
            {props.children}
        }
    }
}
