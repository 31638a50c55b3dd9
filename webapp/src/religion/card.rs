use dioxus::prelude::*;

use content::religion::Religion;

#[derive(Clone, PartialEq, Props)]
pub struct ReligionCardProps {
    religion: Religion,
    on_select: EventHandler<()>,
}

// a card that behaves like a button: clickable, focusable, and activated by enter or
// space from the keyboard
#[component]
pub fn ReligionCard(props: ReligionCardProps) -> Element {
    let religion = props.religion;
    let on_select = props.on_select;

    let class = format!("religion-card {}", religion.accent.class());
    let label = religion.card_label();

    rsx! {
        div {
            class: "{class}",
            role: "button",
            tabindex: "0",
            "aria-label": "{label}",
            onclick: move |_| on_select.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                match evt.key() {
                    Key::Enter => on_select.call(()),
                    Key::Character(c) if c == " " => {
                        // keep the page from scrolling under the drawer
                        evt.prevent_default();
                        on_select.call(());
                    }
                    _ => {}
                }
            },
            h3 { "{religion.name}" }
            p { class: "followers", "{religion.followers}" }
            p { class: "dogma", "{religion.dogma}" }
            div { class: "more",
                "Clique para saber mais"
                span { "→" }
            }
        }
    }
}
