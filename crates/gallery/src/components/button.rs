use dioxus::prelude::*;

/// Visual variant of [`Button`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    /// Parse a variant name, falling back to the default variant.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "secondary" => Self::Secondary,
            "destructive" => Self::Destructive,
            "outline" => Self::Outline,
            "ghost" => Self::Ghost,
            _ => Self::Default,
        }
    }

    fn style(self) -> &'static str {
        match self {
            Self::Default => "background-color: #171717; color: white; border: 1px solid #171717;",
            Self::Secondary => {
                "background-color: #f5f5f5; color: #171717; border: 1px solid #f5f5f5;"
            }
            Self::Destructive => {
                "background-color: #dc2626; color: white; border: 1px solid #dc2626;"
            }
            Self::Outline => "background-color: white; color: #171717; border: 1px solid #d4d4d4;",
            Self::Ghost => "background-color: transparent; color: #171717; border: 1px solid transparent;",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub disabled: bool,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_style = props.variant.style();
    let opacity = if props.disabled { "0.5" } else { "1" };

    rsx! {
        button {
            style: "padding: 0.5rem 1rem; border-radius: 6px; font-size: 0.875rem; font-weight: 500; cursor: pointer; opacity: {opacity}; {variant_style}",
            disabled: props.disabled,
            {props.children}
        }
    }
}
