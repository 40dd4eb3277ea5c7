use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(default)]
    pub label: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default)]
    pub value: String,
    #[props(default)]
    pub disabled: bool,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.25rem; min-width: 16rem;",
            if !props.label.is_empty() {
                label {
                    style: "font-size: 0.875rem; font-weight: 500; color: #404040;",
                    "{props.label}"
                }
            }
            input {
                r#type: "text",
                style: "padding: 0.5rem 0.75rem; border: 1px solid #d4d4d4; border-radius: 6px; font-size: 0.875rem;",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                disabled: props.disabled,
            }
        }
    }
}
